//! Read-only view of a simulation for drawing and HUD text
//!
//! Copied out after a step completes; holds no reference into the simulation.

use glam::Vec2;
use serde::Serialize;

use super::arc::ArcSpan;
use super::state::{Outcome, Ring, Simulation};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingView {
    pub center: Vec2,
    pub radius: f32,
    pub thickness: f32,
    /// Gap start angle, radians in [0, 2π)
    pub gap_start: f32,
    /// Gap end angle, radians in [0, 2π)
    pub gap_end: f32,
    pub gap_width: f32,
}

impl RingView {
    /// The open part of the ring
    pub fn gap(&self) -> ArcSpan {
        ArcSpan::new(self.gap_start, self.gap_width)
    }

    /// The solid part of the ring: gap end round to gap start
    pub fn wall(&self) -> ArcSpan {
        self.gap().complement()
    }

    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.thickness / 2.0
    }

    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.thickness / 2.0
    }
}

impl From<&Ring> for RingView {
    fn from(ring: &Ring) -> Self {
        Self {
            center: ring.center,
            radius: ring.radius,
            thickness: ring.thickness,
            gap_start: ring.gap_start,
            gap_end: ring.gap_end(),
            gap_width: ring.gap_width,
        }
    }
}

/// Everything the presentation shell needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball: BallView,
    /// Innermost first
    pub rings: Vec<RingView>,
    pub outcome: Outcome,
    pub elapsed: f64,
    /// Whole seconds left on the countdown
    pub remaining_secs: u32,
}

impl Snapshot {
    /// HUD countdown line
    pub fn countdown_text(&self) -> String {
        format!("Time: {}s", self.remaining_secs)
    }
}

impl Simulation {
    /// Copy out the drawable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: BallView {
                pos: self.ball.pos,
                radius: self.ball.radius,
            },
            rings: self.rings.iter().map(RingView::from).collect(),
            outcome: self.outcome,
            elapsed: self.elapsed,
            remaining_secs: self.remaining().floor() as u32,
        }
    }
}
