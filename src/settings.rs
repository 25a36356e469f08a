//! Sweep settings
//!
//! The whole configuration surface, loadable from JSON. Any field left out of
//! the document keeps its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SweepError};
use crate::sim::arc::{TargetWindow, half_angle_deg};

/// Sweep configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Ring ===
    pub ring_center: Vec2,
    pub ring_radius: f32,
    pub stroke_width: f32,

    // === Indicator ===
    /// Width is radial thickness, height is chord span
    pub indicator_size: Vec2,

    // === Speed ramp ===
    /// Radians per second at zero progress
    pub base_speed: f32,
    /// Radians per second once progress reaches the cap
    pub max_speed: f32,
    pub progress_cap: u32,

    // === Lap reset ===
    /// Checked against the indicator's end edge
    pub wrap_threshold_deg: f32,
    /// Must lie in [-180, 180)
    pub reset_angle_deg: f32,

    pub target_window: TargetWindow,

    /// Ticks per second for the headless driver
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ring_center: Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT / 2.0),
            ring_radius: RING_RADIUS,
            stroke_width: RING_STROKE_WIDTH,

            indicator_size: Vec2::new(INDICATOR_WIDTH, INDICATOR_HEIGHT),

            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            progress_cap: PROGRESS_CAP,

            wrap_threshold_deg: WRAP_THRESHOLD_DEG,
            reset_angle_deg: RESET_ANGLE_DEG,

            target_window: TargetWindow::default(),

            fps: FPS,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file, falling back to defaults if it is missing
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check everything the sweep depends on before the first tick
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.ring_radius,
            self.stroke_width,
            self.base_speed,
            self.max_speed,
            self.wrap_threshold_deg,
            self.reset_angle_deg,
        ];
        if finite.iter().any(|v| !v.is_finite())
            || !self.ring_center.is_finite()
            || !self.indicator_size.is_finite()
        {
            return Err(SweepError::configuration("settings contain a non-finite value"));
        }

        if self.stroke_width < 0.0 {
            return Err(SweepError::configuration(format!(
                "stroke width {} is negative",
                self.stroke_width
            )));
        }
        if self.ring_radius - self.stroke_width <= 0.0 {
            return Err(SweepError::configuration(format!(
                "ring radius {} must exceed stroke width {}",
                self.ring_radius, self.stroke_width
            )));
        }
        if self.indicator_size.x <= 0.0 || self.indicator_size.y < 0.0 {
            return Err(SweepError::configuration(format!(
                "indicator size {}x{} needs a positive width and a non-negative height",
                self.indicator_size.x, self.indicator_size.y
            )));
        }
        let half_angle = half_angle_deg(self.indicator_size.y, self.ring_radius)?;

        if self.base_speed < 0.0 || self.max_speed < self.base_speed {
            return Err(SweepError::configuration(format!(
                "speed ramp {}..{} must be non-negative and non-decreasing",
                self.base_speed, self.max_speed
            )));
        }
        if self.progress_cap == 0 {
            return Err(SweepError::configuration("progress cap must be positive"));
        }

        if !(-180.0..180.0).contains(&self.reset_angle_deg) {
            return Err(SweepError::configuration(format!(
                "reset angle {}° must lie in [-180, 180)",
                self.reset_angle_deg
            )));
        }
        if self.reset_angle_deg + half_angle >= self.wrap_threshold_deg {
            return Err(SweepError::configuration(format!(
                "indicator at reset angle {}° already reaches wrap threshold {}°",
                self.reset_angle_deg, self.wrap_threshold_deg
            )));
        }

        self.target_window.validate()?;

        if self.fps == 0 {
            return Err(SweepError::configuration("fps must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.ring_center, Vec2::new(960.0, 540.0));
        assert_eq!(settings.target_window, TargetWindow::new(90.0, 120.0).unwrap());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "ring_radius": 200.0, "progress_cap": 10 }"#).unwrap();
        assert_eq!(settings.ring_radius, 200.0);
        assert_eq!(settings.progress_cap, 10);
        assert_eq!(settings.stroke_width, RING_STROKE_WIDTH);
        assert_eq!(settings.wrap_threshold_deg, WRAP_THRESHOLD_DEG);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            indicator_size: Vec2::new(12.0, 30.0),
            target_window: TargetWindow::new(10.0, 45.0).unwrap(),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Settings::from_json("{ ring_radius: }"),
            Err(SweepError::Settings { .. })
        ));
    }

    #[test]
    fn test_validate_rejects() {
        let cases = [
            Settings { stroke_width: 400.0, ..Default::default() },
            Settings { indicator_size: Vec2::new(20.0, 4.0 * RING_RADIUS + 1.0), ..Default::default() },
            Settings { max_speed: 0.5, ..Default::default() },
            Settings { progress_cap: 0, ..Default::default() },
            Settings { reset_angle_deg: 180.0, ..Default::default() },
            Settings { wrap_threshold_deg: -90.0, ..Default::default() },
            Settings { target_window: TargetWindow { start_deg: 120.0, end_deg: 90.0 }, ..Default::default() },
            Settings { ring_radius: f32::INFINITY, ..Default::default() },
            Settings { stroke_width: -1.0, ..Default::default() },
            Settings { indicator_size: Vec2::new(20.0, -40.0), ..Default::default() },
            Settings { indicator_size: Vec2::new(0.0, 40.0), ..Default::default() },
            Settings { indicator_size: Vec2::ZERO, ..Default::default() },
            Settings { target_window: TargetWindow { start_deg: 0.0, end_deg: 2e9 }, ..Default::default() },
            Settings { fps: 0, ..Default::default() },
        ];
        for settings in cases {
            assert!(
                matches!(settings.validate(), Err(SweepError::Configuration { .. })),
                "{settings:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_height_indicator_is_valid() {
        let settings = Settings {
            indicator_size: Vec2::new(20.0, 0.0),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let settings = Settings::load("/nonexistent/ring-sweep/settings.json").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("ring-sweep-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "base_speed": 0.5 }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(settings.base_speed, 0.5);
    }
}
