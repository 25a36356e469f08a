//! Ring Sweep - a timing-ring mechanic
//!
//! An indicator sweeps around a fixed ring at a speed that ramps with
//! progress, while a target arc marks the success zone.
//!
//! Core modules:
//! - `sim`: Sweep state, speed ramp, arc projection and indicator geometry
//! - `mesh`: Render-ready vertex data built from a simulated frame
//! - `settings`: The configuration surface (JSON via serde)
//! - `error`: Error taxonomy

pub mod error;
pub mod mesh;
pub mod settings;
pub mod sim;

pub use error::{Result, SweepError};
pub use settings::Settings;

use glam::Vec2;

/// Default configuration constants
pub mod consts {
    /// Frames per second the driver ticks at
    pub const FPS: u32 = 60;

    /// Surface the ring is laid out on (ring is centered on it)
    pub const SURFACE_WIDTH: f32 = 1920.0;
    pub const SURFACE_HEIGHT: f32 = 1080.0;

    /// Ring defaults - radius is 35% of the short side of the surface
    pub const RING_RADIUS: f32 = 378.0;
    pub const RING_STROKE_WIDTH: f32 = 10.0;

    /// Indicator footprint: width is radial thickness, height is chord span
    pub const INDICATOR_WIDTH: f32 = 20.0;
    pub const INDICATOR_HEIGHT: f32 = 40.0;

    /// Speed ramp (radians/sec)
    pub const BASE_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 2.0;
    pub const PROGRESS_CAP: u32 = 100;

    /// Lap reset: once the indicator's end edge reaches this, snap back
    pub const WRAP_THRESHOLD_DEG: f32 = 270.0;
    pub const RESET_ANGLE_DEG: f32 = -90.0;

    /// Success zone
    pub const TARGET_START_DEG: f32 = 90.0;
    pub const TARGET_END_DEG: f32 = 120.0;
}

/// Normalized angle to [-π, π). Non-finite input comes back unchanged.
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if !angle.is_finite() {
        return angle;
    }
    if angle.abs() > 64.0 * TAU {
        angle %= TAU;
    }
    while angle >= PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
