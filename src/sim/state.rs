//! Simulation state and core entity types
//!
//! Pure physics state only; drawing reads a [`Snapshot`](super::Snapshot).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arc::ArcSpan;
use crate::config::{SimConfig, TieBreak};
use crate::consts::GRAVITY_EPSILON;
use crate::error::ConfigError;
use crate::normalize_angle;

/// Result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Outcome {
    #[default]
    Running,
    /// Ball escaped past the outermost ring
    Won,
    /// Time budget exhausted
    Lost,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Running)
    }

    /// End-of-run message for the HUD
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Outcome::Running => None,
            Outcome::Won => Some("ESCAPED!"),
            Outcome::Lost => Some("TIME'S UP!"),
        }
    }
}

/// The moving body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Fixed point the ball is pulled toward
    pub center: Vec2,
    /// Velocity gained per second toward `center`
    pub gravity: f32,
}

impl Ball {
    pub fn new(center: Vec2, radius: f32, vel: Vec2, gravity: f32) -> Self {
        Self {
            pos: center,
            vel,
            radius,
            center,
            gravity,
        }
    }

    /// One forward-Euler step: pull toward the center, then move
    pub fn integrate(&mut self, dt: f32) {
        let to_center = self.center - self.pos;
        let distance = to_center.length();

        if distance > GRAVITY_EPSILON {
            self.vel += (to_center / distance) * self.gravity * dt;
        }

        self.pos += self.vel * dt;
    }

    /// Distance from the attraction center
    #[inline]
    pub fn distance_from_center(&self) -> f32 {
        self.pos.distance(self.center)
    }
}

/// A rotating wall with one gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    pub center: Vec2,
    /// Centerline radius
    pub radius: f32,
    /// Wall thickness (extends radius ± thickness/2)
    pub thickness: f32,
    /// Gap angular width (radians)
    pub gap_width: f32,
    /// Rotation rate (radians/sec, signed)
    pub rotation_rate: f32,
    /// Current gap start angle, in [0, 2π)
    pub gap_start: f32,
    /// Restitution applied on bounce
    pub restitution: f32,
}

impl Ring {
    pub fn new(
        center: Vec2,
        radius: f32,
        thickness: f32,
        gap_width: f32,
        rotation_rate: f32,
        restitution: f32,
    ) -> Self {
        Self {
            center,
            radius,
            thickness,
            gap_width,
            rotation_rate,
            gap_start: 0.0,
            restitution,
        }
    }

    /// Rotate the gap by `rotation_rate * dt`
    pub fn advance(&mut self, dt: f32) {
        self.gap_start = normalize_angle(self.gap_start + self.rotation_rate * dt);
    }

    /// The open interval of the ring
    #[inline]
    pub fn gap(&self) -> ArcSpan {
        ArcSpan::new(self.gap_start, self.gap_width)
    }

    /// Gap end angle, in [0, 2π)
    #[inline]
    pub fn gap_end(&self) -> f32 {
        self.gap().end()
    }

    /// Whether an angle around the center falls in the gap
    #[inline]
    pub fn is_in_gap(&self, theta: f32) -> bool {
        self.gap().contains_angle(theta)
    }

    /// Radial distances where a ball of `ball_radius` can touch the wall
    pub fn contact_band(&self, ball_radius: f32) -> (f32, f32) {
        let half = self.thickness / 2.0;
        (
            self.radius - half - ball_radius,
            self.radius + half + ball_radius,
        )
    }

    /// Bounce the ball off this ring if it touches solid wall
    ///
    /// Returns whether a bounce happened.
    pub fn resolve_collision(&self, ball: &mut Ball) -> bool {
        super::collision::resolve_ring_collision(self, ball)
    }
}

/// Orchestrator owning the ball and the ring stack
///
/// Only built through [`Simulation::new`]; read it back with
/// [`Simulation::snapshot`].
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) config: SimConfig,
    pub(crate) ball: Ball,
    /// Innermost first
    pub(crate) rings: Vec<Ring>,
    /// Accumulated dt (seconds)
    pub(crate) elapsed: f64,
    pub(crate) outcome: Outcome,
    /// Bounces registered so far
    pub(crate) bounces: u64,
}

impl Simulation {
    /// Build a simulation, rejecting malformed configs
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let center = config.center();
        let ball = Ball::new(
            center,
            config.ball_radius,
            config.initial_velocity,
            config.gravity_strength,
        );

        let gap_width = config.gap_angle();
        let rings: Vec<Ring> = (0..config.ring_count)
            .map(|i| {
                let ring = Ring::new(
                    center,
                    config.ring_radius(i),
                    config.ring_thickness,
                    gap_width,
                    config.ring_rotation_rate(i),
                    config.restitution,
                );
                log::debug!(
                    "Ring {}: radius={}, rate={:.4} rad/s",
                    i,
                    ring.radius,
                    ring.rotation_rate
                );
                ring
            })
            .collect();

        log::info!(
            "Simulation created: {} rings, outermost radius {}, duration {}s",
            rings.len(),
            config.ring_radius(config.ring_count - 1),
            config.duration_secs
        );

        Ok(Self {
            config,
            ball,
            rings,
            elapsed: 0.0,
            outcome: Outcome::Running,
            bounces: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn bounces(&self) -> u64 {
        self.bounces
    }

    /// Seconds left before the run is lost, never negative
    pub fn remaining(&self) -> f32 {
        (f64::from(self.config.duration_secs) - self.elapsed).max(0.0) as f32
    }

    /// Distance the ball must exceed to count as escaped
    pub fn escape_radius(&self) -> f32 {
        let outermost = self.rings.last().map(|r| r.radius).unwrap_or(0.0);
        outermost + self.ball.radius + self.config.ring_spacing / 2.0
    }

    /// Pick the terminal outcome for this frame's conditions
    pub(crate) fn resolve_outcome(&self, escaped: bool, expired: bool) -> Outcome {
        match (escaped, expired, self.config.tie_break) {
            (true, true, TieBreak::PreferLoss) => Outcome::Lost,
            (true, _, _) => Outcome::Won,
            (false, true, _) => Outcome::Lost,
            (false, false, _) => Outcome::Running,
        }
    }
}
