//! Sweep simulation module
//!
//! Pure, tick-driven, single-threaded:
//! - Elapsed time comes from the caller, no clocks in here
//! - No rendering or platform dependencies
//! - All mutable state lives in a `SweepSession`

pub mod angle;
pub mod arc;
pub mod geometry;
pub mod ramp;
pub mod round;
pub mod state;
pub mod tick;

pub use angle::{Angle, to_degrees, to_radians};
pub use arc::{ArcProjector, ProjectedArc, TargetWindow, half_angle_deg, projected_arc};
pub use geometry::{IndicatorPolygon, corners};
pub use ramp::{SpeedProgress, SpeedRamp, current_speed};
pub use round::{NoRounds, OverlapRounds, ProgressChange, RoundController, WrapEvent};
pub use state::{Indicator, Ring, SweepSession, SweepState, WrapPolicy, advance, apply_wrap, reaches_threshold};
pub use tick::{Frame, tick};
