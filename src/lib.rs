//! Ring Escape - a ball falling toward the center of rotating gapped rings
//!
//! Core modules:
//! - `sim`: Frame-stepped physics (radial gravity, ring rotation, bounces, outcome)
//! - `config`: Immutable simulation parameters
//! - `error`: Construction-time configuration errors
//! - `renderer`: Vertex generation from read-only snapshots

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{SimConfig, TieBreak};
pub use error::ConfigError;
pub use sim::{Outcome, Simulation, Snapshot};

use glam::Vec2;
use std::f32::consts::TAU;

/// Default parameters (the classic 25-ring layout)
pub mod consts {
    /// World dimensions; the shared center sits in the middle
    pub const WORLD_WIDTH: f32 = 1000.0;
    pub const WORLD_HEIGHT: f32 = 800.0;
    /// Target frame rate of the presentation shell
    pub const FPS: u32 = 60;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;

    /// Radial gravity (velocity gained per second toward the center)
    pub const GRAVITY_STRENGTH: f32 = 0.05;
    /// Below this distance from the center gravity is skipped
    pub const GRAVITY_EPSILON: f32 = 1.0;
    /// Fraction of normal velocity kept after a wall bounce
    pub const RESTITUTION: f32 = 0.85;

    /// Ring layout
    pub const RING_COUNT: usize = 25;
    /// Largest ring stack a config may ask for
    pub const MAX_RING_COUNT: usize = 10_000;
    pub const INITIAL_RING_RADIUS: f32 = 50.0;
    pub const RING_SPACING: f32 = 25.0;
    pub const RING_THICKNESS: f32 = 10.0;
    pub const GAP_ANGLE_DEGREES: f32 = 20.0;

    /// Innermost ring speed and per-ring increment (degrees/sec)
    pub const BASE_ROTATION_SPEED_DEG: f32 = 5.0;
    pub const SPEED_INCREMENT_DEG: f32 = 0.2;

    /// Time budget before the run is lost
    pub const DURATION_SECS: f32 = 50.0;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y) around the origin
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta), theta in [0, 2π)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), normalize_angle(pos.y.atan2(pos.x)))
}
