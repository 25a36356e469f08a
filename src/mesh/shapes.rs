//! Shape generation for the ring, the target arc and the indicator

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::polar_to_cartesian;
use crate::sim::angle::to_radians;
use crate::sim::arc::TargetWindow;
use crate::sim::geometry::IndicatorPolygon;
use crate::sim::state::{Ring, SweepSession};
use crate::sim::tick::Frame;

/// Segments used for a full ring
pub const RING_SEGMENTS: u32 = 128;
/// Arc tessellation density for the target band
pub const SEGMENTS_PER_DEGREE: f32 = 0.5;
/// Segment bounds for the target band (the upper one is a full lap)
pub const MIN_ARC_SEGMENTS: u32 = 4;
pub const MAX_ARC_SEGMENTS: u32 = (360.0 * SEGMENTS_PER_DEGREE) as u32;
/// How far the target band spills past the ring stroke on each side
pub const TARGET_BLEED: f32 = 1.0;

/// Thick arc band between two radii, from `theta_start` to `theta_end` (radians)
fn band(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    theta_start: f32,
    theta_end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let span = theta_end - theta_start;
    let mut vertices = Vec::with_capacity(segments as usize * 6);

    for i in 0..segments {
        let theta1 = theta_start + span * (i as f32 / segments as f32);
        let theta2 = theta_start + span * ((i + 1) as f32 / segments as f32);

        let inner1 = center + polar_to_cartesian(inner_radius, theta1);
        let outer1 = center + polar_to_cartesian(outer_radius, theta1);
        let inner2 = center + polar_to_cartesian(inner_radius, theta2);
        let outer2 = center + polar_to_cartesian(outer_radius, theta2);

        // Two triangles per segment
        vertices.push(Vertex::at(inner1, color));
        vertices.push(Vertex::at(outer1, color));
        vertices.push(Vertex::at(inner2, color));

        vertices.push(Vertex::at(inner2, color));
        vertices.push(Vertex::at(outer1, color));
        vertices.push(Vertex::at(outer2, color));
    }

    vertices
}

/// The ring's stroke, all the way round
pub fn ring_band(ring: &Ring, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    band(
        ring.center(),
        ring.inner_radius(),
        ring.radius(),
        0.0,
        std::f32::consts::TAU,
        color,
        segments,
    )
}

/// The success zone, drawn slightly wider than the stroke so it covers it
pub fn target_band(ring: &Ring, window: &TargetWindow, color: [f32; 4]) -> Vec<Vertex> {
    let segments = ((window.span_deg() * SEGMENTS_PER_DEGREE).ceil() as u32)
        .clamp(MIN_ARC_SEGMENTS, MAX_ARC_SEGMENTS);
    band(
        ring.center(),
        ring.inner_radius() - TARGET_BLEED,
        ring.radius() + TARGET_BLEED,
        to_radians(window.start_deg),
        to_radians(window.end_deg),
        color,
        segments,
    )
}

/// The indicator rectangle as two triangles
pub fn indicator_quad(polygon: &IndicatorPolygon, color: [f32; 4]) -> Vec<Vertex> {
    polygon
        .triangles()
        .iter()
        .flatten()
        .map(|&p| Vertex::at(p, color))
        .collect()
}

/// Ring, then target, then indicator, in draw order
pub fn frame_vertices(session: &SweepSession, frame: &Frame) -> Vec<Vertex> {
    let mut vertices = ring_band(session.ring(), colors::RING, RING_SEGMENTS);
    vertices.extend(target_band(session.ring(), session.target_window(), colors::TARGET));
    vertices.extend(indicator_quad(&frame.polygon, colors::INDICATOR));
    vertices
}
