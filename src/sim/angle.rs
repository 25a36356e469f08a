//! Angle units
//!
//! The sweep stores its angle in radians, while thresholds, target windows and
//! projected arcs are expressed in degrees. `Angle` always holds radians and
//! only hands out degrees through explicit accessors, so the two units never
//! mix at a call site.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::normalize_angle;

/// Degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Radians to degrees
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}

#[inline]
pub fn cos(x: f32) -> f32 {
    x.cos()
}

#[inline]
pub fn sin(x: f32) -> f32 {
    x.sin()
}

/// Four-quadrant arctangent, in radians
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

/// An angle, stored in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f32);

impl Angle {
    pub const ZERO: Self = Self(0.0);

    #[inline]
    pub const fn from_radians(radians: f32) -> Self {
        Self(radians)
    }

    #[inline]
    pub fn from_degrees(degrees: f32) -> Self {
        Self(to_radians(degrees))
    }

    /// Angle of `point` as seen from `center` (atan2 on the offset)
    pub fn of_point(center: Vec2, point: Vec2) -> Self {
        let d = point - center;
        Self(atan2(d.y, d.x))
    }

    #[inline]
    pub const fn radians(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        to_degrees(self.0)
    }

    #[inline]
    pub fn cos(self) -> f32 {
        cos(self.0)
    }

    #[inline]
    pub fn sin(self) -> f32 {
        sin(self.0)
    }

    /// Unit vector pointing along this angle
    #[inline]
    pub fn direction(self) -> Vec2 {
        Vec2::new(self.cos(), self.sin())
    }

    /// Same direction, wrapped into [-π, π)
    #[inline]
    pub fn normalized(self) -> Self {
        Self(normalize_angle(self.0))
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.degrees())
    }
}
