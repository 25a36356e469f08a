//! Arc geometry on the ring
//!
//! Both arcs here live on the same degree convention as the wrap threshold:
//! 0° along +x, growing toward +y, with no modulo applied to the bounds.
//! - `ProjectedArc`: the interval the indicator's chord footprint covers
//! - `TargetWindow`: the success zone

use serde::{Deserialize, Serialize};

use super::angle::{Angle, to_degrees};
use crate::consts::{TARGET_END_DEG, TARGET_START_DEG};
use crate::error::{Result, SweepError};

/// Angular half-width (degrees) covered by an indicator of `indicator_height`
/// on a ring of `radius`.
///
/// `asin(height / (4 × radius))`, so the full footprint is
/// `2 × asin(height / (4 × radius))`. Fails when the ratio leaves [-1, 1].
pub fn half_angle_deg(indicator_height: f32, radius: f32) -> Result<f32> {
    let ratio = indicator_height / (4.0 * radius);
    if !ratio.is_finite() || !(-1.0..=1.0).contains(&ratio) {
        return Err(SweepError::configuration(format!(
            "indicator height {indicator_height} cannot be projected onto a ring of radius {radius}"
        )));
    }
    Ok(to_degrees(ratio.asin()))
}

/// Arc centered on `center_angle_deg` with the given half-width
pub fn projected_arc(center_angle_deg: f32, half_angle_deg: f32) -> ProjectedArc {
    ProjectedArc {
        start_deg: center_angle_deg - half_angle_deg,
        end_deg: center_angle_deg + half_angle_deg,
    }
}

/// Projects an indicator's physical size onto a ring.
///
/// The half-angle only depends on static configuration, so it is computed
/// (and validated) once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcProjector {
    half_angle_deg: f32,
}

impl ArcProjector {
    pub fn new(indicator_height: f32, radius: f32) -> Result<Self> {
        Ok(Self {
            half_angle_deg: half_angle_deg(indicator_height, radius)?,
        })
    }

    #[inline]
    pub fn half_angle_deg(&self) -> f32 {
        self.half_angle_deg
    }

    /// Full angular footprint (degrees)
    #[inline]
    pub fn span_deg(&self) -> f32 {
        2.0 * self.half_angle_deg
    }

    pub fn project(&self, center: Angle) -> ProjectedArc {
        projected_arc(center.degrees(), self.half_angle_deg)
    }
}

/// Angular interval occupied by the indicator (degrees, start <= end)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedArc {
    pub start_deg: f32,
    pub end_deg: f32,
}

impl ProjectedArc {
    pub fn span_deg(&self) -> f32 {
        self.end_deg - self.start_deg
    }

    pub fn center_deg(&self) -> f32 {
        (self.start_deg + self.end_deg) / 2.0
    }

    /// True if any part of the arc lies inside the window (touching counts).
    /// Windows one lap apart are treated as the same window.
    pub fn overlaps(&self, window: &TargetWindow) -> bool {
        window.laps().any(|(start, end)| self.start_deg <= end && self.end_deg >= start)
    }

    /// True if the whole arc lies inside the window
    pub fn is_within(&self, window: &TargetWindow) -> bool {
        window.laps().any(|(start, end)| self.start_deg >= start && self.end_deg <= end)
    }
}

/// Success zone on the ring (degrees, start < end)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetWindow {
    pub start_deg: f32,
    pub end_deg: f32,
}

impl Default for TargetWindow {
    fn default() -> Self {
        Self {
            start_deg: TARGET_START_DEG,
            end_deg: TARGET_END_DEG,
        }
    }
}

impl TargetWindow {
    pub fn new(start_deg: f32, end_deg: f32) -> Result<Self> {
        let window = Self { start_deg, end_deg };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.start_deg.is_finite() || !self.end_deg.is_finite() {
            return Err(SweepError::configuration("target window bounds must be finite"));
        }
        if self.start_deg >= self.end_deg {
            return Err(SweepError::configuration(format!(
                "target window start {} must be below end {}",
                self.start_deg, self.end_deg
            )));
        }
        if self.span_deg() > 360.0 {
            return Err(SweepError::configuration(format!(
                "target window spans {}°, more than a full lap",
                self.span_deg()
            )));
        }
        Ok(())
    }

    pub fn span_deg(&self) -> f32 {
        self.end_deg - self.start_deg
    }

    /// Check if an angle (degrees, any lap) falls inside the window
    pub fn contains_deg(&self, deg: f32) -> bool {
        self.laps().any(|(start, end)| deg >= start && deg <= end)
    }

    pub fn contains(&self, angle: Angle) -> bool {
        self.contains_deg(angle.degrees())
    }

    /// The window shifted one lap back, as-is, and one lap forward
    fn laps(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        [-360.0_f32, 0.0, 360.0]
            .into_iter()
            .map(move |shift| (self.start_deg + shift, self.end_deg + shift))
    }
}
