//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }
}

/// Colors for sweep elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.96, 0.96, 0.96, 1.0];
    pub const RING: [f32; 4] = [0.51, 0.51, 0.51, 1.0];
    pub const TARGET: [f32; 4] = [0.0, 0.47, 0.95, 1.0];
    pub const INDICATOR: [f32; 4] = [0.9, 0.16, 0.22, 1.0];
}
