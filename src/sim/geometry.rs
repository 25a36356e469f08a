//! Indicator geometry
//!
//! The indicator is a small rectangle riding the ring. Its corners are built
//! from a local template, rotated by the sweep angle and moved onto the ring,
//! pulled inward so the rectangle sits astride the ring's stroke.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::angle::Angle;
use super::state::{Indicator, Ring};

/// Point on the circumference at `center_angle`
#[inline]
pub fn anchor_point(center_angle: Angle, ring_center: Vec2, ring_radius: f32) -> Vec2 {
    ring_center + center_angle.direction() * ring_radius
}

/// Corners of the indicator, in bl, tl, tr, br order
pub fn corners(
    center_angle: Angle,
    indicator_size: Vec2,
    ring_center: Vec2,
    ring_radius: f32,
    stroke_width: f32,
) -> IndicatorPolygon {
    let dir = center_angle.direction();
    let anchor = anchor_point(center_angle, ring_center, ring_radius)
        + dir * (-(indicator_size.x - stroke_width) / 2.0);

    let half_width = indicator_size.x / 2.0;
    let half_height = indicator_size.y / 2.0;

    let rotation = Vec2::from_angle(center_angle.radians());
    let place = |local: Vec2| rotation.rotate(local) + anchor;

    IndicatorPolygon {
        corners: [
            place(Vec2::new(-half_height, -half_width)),
            place(Vec2::new(half_height, -half_width)),
            place(Vec2::new(half_height, half_width)),
            place(Vec2::new(-half_height, half_width)),
        ],
    }
}

/// The indicator's oriented rectangle in ring space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPolygon {
    /// bl, tl, tr, br
    pub corners: [Vec2; 4],
}

impl IndicatorPolygon {
    pub fn at(center_angle: Angle, indicator: &Indicator, ring: &Ring) -> Self {
        corners(
            center_angle,
            indicator.size,
            ring.center(),
            ring.radius(),
            ring.stroke_width(),
        )
    }

    /// Two triangles covering the rectangle
    pub fn triangles(&self) -> [[Vec2; 3]; 2] {
        let [c0, c1, c2, c3] = self.corners;
        [[c0, c3, c2], [c2, c1, c0]]
    }

    pub fn centroid(&self) -> Vec2 {
        self.corners.iter().copied().sum::<Vec2>() / 4.0
    }

    /// Point-in-polygon (edges count as inside).
    ///
    /// A polygon with no area (zero width or height) contains nothing.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let mut sign = 0.0_f32;
        for i in 0..4 {
            let a = self.corners[i];
            let b = self.corners[(i + 1) % 4];
            let cross = (b - a).perp_dot(point - a);
            if cross == 0.0 {
                // On the edge's line: only inside if within the edge itself
                if !(point.cmpge(a.min(b)).all() && point.cmple(a.max(b)).all()) {
                    return false;
                }
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        sign != 0.0
    }
}
