//! Ring Sweep headless driver
//!
//! Simulates the sweep at a fixed frame rate and logs what a renderer would
//! draw. Set `RUST_LOG=debug` to see every wrap.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ring_sweep::Settings;
use ring_sweep::mesh::frame_vertices;
use ring_sweep::sim::{OverlapRounds, SweepSession, tick};

#[derive(Parser, Debug)]
#[command(name = "ring-sweep", version, about, long_about = None)]
struct Cli {
    /// Settings file (JSON). Missing files fall back to the defaults
    #[arg(default_value = "ring-sweep.json")]
    settings: PathBuf,

    /// Simulated time to run for, in seconds
    #[arg(short, long, default_value_t = 10.0, value_parser = parse_seconds)]
    seconds: f32,
}

fn parse_seconds(s: &str) -> Result<f32, String> {
    let seconds: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("{seconds} is not a non-negative number of seconds"));
    }
    Ok(seconds)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::info!("Ring Sweep (headless) starting...");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("ring-sweep: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ring_sweep::Result<()> {
    let settings = Settings::load(&cli.settings)?;
    let mut session = SweepSession::new(&settings)?;
    let mut rounds = OverlapRounds::default();

    let dt = 1.0 / settings.fps as f32;
    let frames = (cli.seconds * settings.fps as f32).round() as u64;

    for frame_index in 1..=frames {
        let frame = tick(&mut session, dt, &mut rounds)?;

        if let Some(event) = frame.wrap {
            log::info!(
                "Lap {} ended at {:.2}..{:.2} ({:?}), speed now {:.2} rad/s",
                event.lap,
                event.arc.start_deg,
                event.arc.end_deg,
                frame.progress_change,
                session.speed()
            );
        }

        if frame_index % settings.fps as u64 == 0 {
            let vertices = frame_vertices(&session, &frame);
            log::info!(
                "t={:>5.1}s {} ({} vertices)",
                frame_index as f32 * dt,
                frame,
                vertices.len()
            );
        }
    }

    log::info!(
        "Done: {} laps, {} hits, {} misses, progress {}",
        session.laps(),
        rounds.hits,
        rounds.misses,
        session.progress_count()
    );
    Ok(())
}
