//! Collision detection and response between the ball and a gapped ring
//!
//! The ring wall is a thick band around its centerline radius. A ball inside
//! that band bounces unless its angle around the shared center falls in the
//! ring's gap, in which case it passes through untouched.

use glam::Vec2;

use super::state::{Ball, Ring};
use crate::cartesian_to_polar;

/// Result of testing a ball against one ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Ball is radially clear of the wall band
    Clear,
    /// Ball is in the band but lined up with the gap
    Gap,
    /// Ball touches solid wall
    Wall {
        /// Unit normal from ring center toward ball center
        normal: Vec2,
        /// Distance from ring center to ball center
        distance: f32,
    },
}

impl Contact {
    #[inline]
    pub fn is_wall(&self) -> bool {
        matches!(self, Contact::Wall { .. })
    }
}

/// Classify a ball position against a ring's band and gap
pub fn ball_ring_contact(ball_pos: Vec2, ball_radius: f32, ring: &Ring) -> Contact {
    let offset = ball_pos - ring.center;
    let (distance, theta) = cartesian_to_polar(offset);

    let (band_min, band_max) = ring.contact_band(ball_radius);
    if distance < band_min || distance > band_max {
        return Contact::Clear;
    }

    if ring.is_in_gap(theta) {
        return Contact::Gap;
    }

    // Normal is undefined exactly on the center; skip this frame
    if distance == 0.0 {
        return Contact::Clear;
    }

    Contact::Wall {
        normal: offset / distance,
        distance,
    }
}

/// Reflect velocity off a surface with restitution
///
/// v' = v - (1 + e)(v·n)n. The tangential component is untouched and the
/// normal component is reversed and scaled by `e`.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2, restitution: f32) -> Vec2 {
    velocity - (1.0 + restitution) * velocity.dot(normal) * normal
}

/// Signed overlap along the normal; the ball moves by `-normal * overlap`
///
/// Inside the centerline the ball is held at `radius - ball_radius`,
/// outside at `radius + ball_radius`. Zero when no correction is needed.
pub fn penetration_overlap(ring_radius: f32, ball_radius: f32, distance: f32) -> f32 {
    if distance < ring_radius {
        let overlap = (ring_radius - ball_radius) - distance;
        if overlap > 0.0 { overlap } else { 0.0 }
    } else {
        let overlap = distance - (ring_radius + ball_radius);
        if overlap < 0.0 { overlap } else { 0.0 }
    }
}

/// Bounce the ball off the ring wall and push it out of overlap
///
/// Returns whether a bounce happened.
pub fn resolve_ring_collision(ring: &Ring, ball: &mut Ball) -> bool {
    let Contact::Wall { normal, distance } = ball_ring_contact(ball.pos, ball.radius, ring) else {
        return false;
    };

    ball.vel = reflect_velocity(ball.vel, normal, ring.restitution);

    let overlap = penetration_overlap(ring.radius, ball.radius, distance);
    ball.pos -= normal * overlap;

    log::trace!(
        "Bounce on ring r={} at {:?}, vel -> {:?}",
        ring.radius,
        ball.pos,
        ball.vel
    );

    true
}
