//! Per-frame sweep tick
//!
//! One tick per rendered frame: ramp the speed, advance the angle, check the
//! lap reset, then derive everything the renderer needs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::angle::Angle;
use super::arc::ProjectedArc;
use super::geometry::IndicatorPolygon;
use super::round::{ProgressChange, RoundController, WrapEvent};
use super::state::{SweepSession, advance};
use crate::error::{Result, SweepError};

/// Everything the renderer consumes for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub center_angle: Angle,
    pub arc: ProjectedArc,
    pub polygon: IndicatorPolygon,
    /// Speed this frame advanced at (radians/sec)
    pub speed: f32,
    pub progress_count: u32,
    /// Set on the frame a wrap fired
    pub wrap: Option<WrapEvent>,
    pub progress_change: ProgressChange,
}

impl Frame {
    /// Current session state without advancing it
    pub fn capture(session: &SweepSession) -> Self {
        Self {
            center_angle: session.center_angle(),
            arc: session.projected_arc(),
            polygon: session.polygon(),
            speed: session.speed(),
            progress_count: session.progress_count(),
            wrap: None,
            progress_change: ProgressChange::Unchanged,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {:.2}", self.arc.start_deg, self.arc.end_deg)
    }
}

/// Advance the session by `elapsed` seconds.
///
/// A negative or non-finite `elapsed` is rejected and the session is left
/// untouched. Otherwise the tick commits fully.
pub fn tick<R: RoundController + ?Sized>(
    session: &mut SweepSession,
    elapsed: f32,
    rounds: &mut R,
) -> Result<Frame> {
    if !elapsed.is_finite() || elapsed < 0.0 {
        log::warn!("Rejected tick with elapsed time {elapsed}");
        return Err(SweepError::InvalidInput { elapsed });
    }

    let speed = session.speed();
    let mut angle = advance(session.state.center_angle, speed, elapsed);
    log::trace!("tick: angle={angle} speed={speed:.3}");

    let arc = session.projector.project(angle);
    let mut wrap = None;
    let mut progress_change = ProgressChange::Unchanged;

    if session.wrap.should_wrap(&arc) {
        session.state.laps += 1;
        let event = WrapEvent {
            lap: session.state.laps,
            arc,
            target: session.target,
            center_angle: angle,
            progress_count: session.progress.count(),
        };

        progress_change = rounds.on_wrap(&event);
        match progress_change {
            ProgressChange::Unchanged => {}
            ProgressChange::Advance(n) => session.progress.advance(n),
            ProgressChange::ResetRound => session.progress.reset(),
        }

        log::debug!(
            "Wrap #{}: arc {:.2}..{:.2} -> {:?} (progress {})",
            event.lap,
            arc.start_deg,
            arc.end_deg,
            progress_change,
            session.progress.count()
        );

        // Fresh lap starts from a normalized angle
        angle = session.wrap.apply(angle, &arc).normalized();
        wrap = Some(event);
    }

    session.state.center_angle = angle;

    Ok(Frame {
        wrap,
        progress_change,
        speed,
        ..Frame::capture(session)
    })
}
