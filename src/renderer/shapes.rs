//! Shape generation for 2D primitives
//!
//! Triangle lists in world coordinates, built from a [`Snapshot`].

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Color, Vertex, as_bytes, colors};
use crate::polar_to_cartesian;
use crate::sim::{ArcSpan, Outcome, RingView, Snapshot};

/// Segments used for a full circle
pub const CIRCLE_SEGMENTS: u32 = 32;
/// Arc tessellation density
pub const SEGMENTS_PER_RADIAN: f32 = 12.0;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let p1 = center + polar_to_cartesian(radius, theta1);
        let p2 = center + polar_to_cartesian(radius, theta2);

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(p1, color));
        vertices.push(Vertex::at(p2, color));
    }

    vertices
}

/// Generate vertices for a thick arc band between two radii
pub fn arc_band(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    arc: ArcSpan,
    color: Color,
    segments_per_radian: f32,
) -> Vec<Vertex> {
    if arc.width <= 0.0 {
        return Vec::new();
    }

    let num_segments = ((arc.width * segments_per_radian) as u32).max(4);
    let mut vertices = Vec::with_capacity((num_segments * 6) as usize);

    for i in 0..num_segments {
        let theta1 = arc.start + (i as f32 / num_segments as f32) * arc.width;
        let theta2 = arc.start + ((i + 1) as f32 / num_segments as f32) * arc.width;

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

/// Solid wall of one ring, gap left open
pub fn ring_wall(ring: &RingView, color: Color) -> Vec<Vertex> {
    arc_band(
        ring.center,
        ring.inner_radius(),
        ring.outer_radius(),
        ring.wall(),
        color,
        SEGMENTS_PER_RADIAN,
    )
}

/// Whole frame: ring walls first, ball on top
pub fn scene(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut vertices: Vec<Vertex> = snapshot
        .rings
        .iter()
        .flat_map(|ring| ring_wall(ring, colors::RING))
        .collect();

    vertices.extend(circle(
        snapshot.ball.pos,
        snapshot.ball.radius,
        colors::BALL,
        CIRCLE_SEGMENTS,
    ));

    vertices
}

/// Color for the end-of-run banner
pub fn banner_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Won => colors::WIN_MESSAGE,
        Outcome::Lost => colors::LOSE_MESSAGE,
        Outcome::Running => colors::TEXT,
    }
}

/// Map world pixels (y down) to clip space (y up)
pub fn to_clip_space(vertices: &mut [Vertex], world_width: f32, world_height: f32) {
    for v in vertices {
        v.position = [
            v.position[0] / world_width * 2.0 - 1.0,
            1.0 - v.position[1] / world_height * 2.0,
        ];
    }
}

/// Everything a presentation shell needs to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: Color,
    /// Clip-space triangle list
    pub vertices: Vec<Vertex>,
    pub countdown: String,
    /// Set once the run has ended
    pub banner: Option<(&'static str, Color)>,
}

impl Frame {
    pub fn vertex_bytes(&self) -> &[u8] {
        as_bytes(&self.vertices)
    }
}

/// Build a drawable frame for a `world_size` viewport
pub fn frame(snapshot: &Snapshot, world_size: Vec2) -> Frame {
    let mut vertices = scene(snapshot);
    to_clip_space(&mut vertices, world_size.x, world_size.y);

    Frame {
        clear_color: colors::BACKGROUND,
        vertices,
        countdown: snapshot.countdown_text(),
        banner: snapshot
            .outcome
            .banner()
            .map(|text| (text, banner_color(snapshot.outcome))),
    }
}
