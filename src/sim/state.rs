//! Sweep state and the owned session
//!
//! The only state that changes across ticks is the indicator's center angle
//! and the progress counter. Everything else is fixed when the session is
//! built from `Settings`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::angle::Angle;
use super::arc::{ArcProjector, ProjectedArc, TargetWindow};
use super::geometry::IndicatorPolygon;
use super::ramp::{SpeedProgress, SpeedRamp};
use crate::consts::*;
use crate::error::{Result, SweepError};
use crate::settings::Settings;

/// The circular path, immutable per session. Only built through `Ring::new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ring {
    center: Vec2,
    radius: f32,
    stroke_width: f32,
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            center: Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT / 2.0),
            radius: RING_RADIUS,
            stroke_width: RING_STROKE_WIDTH,
        }
    }
}

impl Ring {
    pub fn new(center: Vec2, radius: f32, stroke_width: f32) -> Result<Self> {
        if !center.is_finite() || !radius.is_finite() || !stroke_width.is_finite() {
            return Err(SweepError::configuration("ring geometry must be finite"));
        }
        if stroke_width < 0.0 {
            return Err(SweepError::configuration(format!(
                "stroke width {stroke_width} is negative"
            )));
        }
        if radius - stroke_width <= 0.0 {
            return Err(SweepError::configuration(format!(
                "ring radius {radius} must exceed stroke width {stroke_width}"
            )));
        }
        Ok(Self {
            center,
            radius,
            stroke_width,
        })
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Outer edge of the stroke
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Inner edge of the stroke
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.stroke_width
    }
}

/// The sweeping marker. Width is radial thickness, height is chord span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub size: Vec2,
}

impl Default for Indicator {
    fn default() -> Self {
        Self {
            size: Vec2::new(INDICATOR_WIDTH, INDICATOR_HEIGHT),
        }
    }
}

/// Advance an angle by `speed × elapsed`. No wrapping happens here.
#[inline]
pub fn advance(angle: Angle, speed: f32, elapsed: f32) -> Angle {
    angle + Angle::from_radians(speed * elapsed)
}

/// Snap back to `reset_angle` once the indicator's end edge reaches the
/// threshold, otherwise keep `angle`.
#[inline]
pub fn apply_wrap(angle: Angle, projected_end_deg: f32, wrap_threshold_deg: f32, reset_angle: Angle) -> Angle {
    if reaches_threshold(projected_end_deg, wrap_threshold_deg) {
        reset_angle
    } else {
        angle
    }
}

/// True once the indicator's end edge has reached the wrap threshold
#[inline]
pub fn reaches_threshold(projected_end_deg: f32, wrap_threshold_deg: f32) -> bool {
    projected_end_deg >= wrap_threshold_deg
}

/// Lap reset rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrapPolicy {
    /// Compared against the indicator's end edge, not its center
    pub threshold_deg: f32,
    /// Where the sweep restarts, already in [-π, π)
    pub reset_angle: Angle,
}

impl Default for WrapPolicy {
    fn default() -> Self {
        Self {
            threshold_deg: WRAP_THRESHOLD_DEG,
            reset_angle: Angle::from_degrees(RESET_ANGLE_DEG),
        }
    }
}

impl WrapPolicy {
    #[inline]
    pub fn should_wrap(&self, arc: &ProjectedArc) -> bool {
        reaches_threshold(arc.end_deg, self.threshold_deg)
    }

    /// `apply_wrap` under this policy
    #[inline]
    pub fn apply(&self, angle: Angle, arc: &ProjectedArc) -> Angle {
        apply_wrap(angle, arc.end_deg, self.threshold_deg, self.reset_angle)
    }
}

/// Authoritative sweep position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepState {
    /// Indicator center (radians, not normalized mid-sweep)
    pub center_angle: Angle,
    /// Number of wraps so far
    pub laps: u64,
}

impl Default for SweepState {
    fn default() -> Self {
        Self {
            center_angle: Angle::from_degrees(RESET_ANGLE_DEG),
            laps: 0,
        }
    }
}

/// One independent sweep: static configuration plus the mutable state.
///
/// Serializable as a snapshot, but only `SweepSession::new` builds one.
#[derive(Debug, Clone, Serialize)]
pub struct SweepSession {
    pub(crate) ring: Ring,
    pub(crate) indicator: Indicator,
    pub(crate) projector: ArcProjector,
    pub(crate) ramp: SpeedRamp,
    pub(crate) wrap: WrapPolicy,
    pub(crate) target: TargetWindow,
    pub(crate) state: SweepState,
    pub(crate) progress: SpeedProgress,
}

impl SweepSession {
    /// Build a session, rejecting any configuration the sweep can't run with
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let ring = Ring::new(settings.ring_center, settings.ring_radius, settings.stroke_width)?;
        let indicator = Indicator {
            size: settings.indicator_size,
        };
        let projector = ArcProjector::new(indicator.size.y, ring.radius())?;
        let wrap = WrapPolicy {
            threshold_deg: settings.wrap_threshold_deg,
            reset_angle: Angle::from_degrees(settings.reset_angle_deg).normalized(),
        };

        log::info!(
            "Sweep session: ring r={} stroke={} indicator={}x{} half-angle={:.3}°",
            ring.radius(),
            ring.stroke_width(),
            indicator.size.x,
            indicator.size.y,
            projector.half_angle_deg()
        );

        Ok(Self {
            ring,
            indicator,
            projector,
            ramp: SpeedRamp {
                base_speed: settings.base_speed,
                max_speed: settings.max_speed,
                progress_cap: settings.progress_cap,
            },
            wrap,
            target: settings.target_window,
            state: SweepState {
                center_angle: wrap.reset_angle,
                laps: 0,
            },
            progress: SpeedProgress::default(),
        })
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    pub fn target_window(&self) -> &TargetWindow {
        &self.target
    }

    pub fn wrap_policy(&self) -> &WrapPolicy {
        &self.wrap
    }

    pub fn projector(&self) -> &ArcProjector {
        &self.projector
    }

    pub fn center_angle(&self) -> Angle {
        self.state.center_angle
    }

    pub fn progress_count(&self) -> u32 {
        self.progress.count()
    }

    pub fn laps(&self) -> u64 {
        self.state.laps
    }

    /// Speed the next tick will advance at
    pub fn speed(&self) -> f32 {
        self.ramp.speed_for(&self.progress)
    }

    pub fn projected_arc(&self) -> ProjectedArc {
        self.projector.project(self.state.center_angle)
    }

    pub fn polygon(&self) -> IndicatorPolygon {
        IndicatorPolygon::at(self.state.center_angle, &self.indicator, &self.ring)
    }

    /// Start a new round: progress back to zero, sweep back to the reset angle
    pub fn reset_round(&mut self) {
        log::debug!("Round reset after {} laps", self.state.laps);
        self.progress.reset();
        self.state.center_angle = self.wrap.reset_angle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::angle::to_radians;

    #[test]
    fn test_ring_validation() {
        assert!(Ring::new(Vec2::ZERO, 378.0, 10.0).is_ok());
        assert!(Ring::new(Vec2::ZERO, 10.0, 10.0).is_err());
        assert!(Ring::new(Vec2::ZERO, 5.0, 10.0).is_err());
        assert!(Ring::new(Vec2::ZERO, 100.0, -1.0).is_err());
        assert!(Ring::new(Vec2::new(f32::NAN, 0.0), 100.0, 1.0).is_err());
        let ring = Ring::default();
        assert_eq!(ring.inner_radius(), RING_RADIUS - RING_STROKE_WIDTH);
    }

    #[test]
    fn test_advance_accumulates_unbounded() {
        let a = advance(Angle::from_radians(3.0), 2.0, 5.0);
        assert_eq!(a.radians(), 13.0);
    }

    #[test]
    fn test_apply_wrap() {
        let reset = Angle::from_degrees(-90.0);
        let angle = Angle::from_degrees(200.0);
        assert_eq!(apply_wrap(angle, 269.9, 270.0, reset), angle);
        assert_eq!(apply_wrap(angle, 270.0, 270.0, reset), reset);
        assert_eq!(apply_wrap(angle, 400.0, 270.0, reset), reset);
    }

    #[test]
    fn test_policy_agrees_with_apply_wrap() {
        let policy = WrapPolicy::default();
        let angle = Angle::from_degrees(200.0);
        for end_deg in [100.0, 269.99, 270.0, 270.01, 1e6] {
            let arc = ProjectedArc { start_deg: end_deg - 3.0, end_deg };
            let wrapped = policy.apply(angle, &arc);
            assert_eq!(policy.should_wrap(&arc), wrapped == policy.reset_angle);
            assert_eq!(wrapped, apply_wrap(angle, end_deg, 270.0, policy.reset_angle));
        }
    }

    #[test]
    fn test_session_snapshot_serializes() {
        let session = SweepSession::new(&Settings::default()).unwrap();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["progress"]["count"], 0);
        assert_eq!(json["ring"]["radius"], RING_RADIUS as f64);
    }

    #[test]
    fn test_session_initial_state() {
        let session = SweepSession::new(&Settings::default()).unwrap();
        assert_eq!(session.center_angle().radians(), to_radians(-90.0));
        assert_eq!(session.progress_count(), 0);
        assert_eq!(session.laps(), 0);
        assert_eq!(session.speed(), BASE_SPEED);
    }

    #[test]
    fn test_session_rejects_oversized_indicator() {
        let settings = Settings {
            ring_radius: 10.0,
            stroke_width: 2.0,
            indicator_size: Vec2::new(5.0, 41.0),
            ..Default::default()
        };
        assert!(matches!(
            SweepSession::new(&settings),
            Err(SweepError::Configuration { .. })
        ));
    }

    #[test]
    fn test_reset_round() {
        let mut session = SweepSession::new(&Settings::default()).unwrap();
        session.progress.advance(40);
        session.state.center_angle = Angle::from_degrees(45.0);
        session.reset_round();
        assert_eq!(session.progress_count(), 0);
        assert_eq!(session.center_angle(), Angle::from_degrees(-90.0));
    }
}
