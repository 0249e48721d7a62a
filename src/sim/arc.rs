//! Angular intervals on a circle
//!
//! An arc is a start angle plus a width, both in radians. The start is kept
//! in [0, 2π); the end is derived and may sit numerically below the start when
//! the arc straddles the 0/2π seam. Gap classification for collisions and
//! wall splitting for rendering both go through [`ArcSpan::contains_angle`].

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::{normalize_angle, polar_to_cartesian};

/// An angular interval with wraparound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpan {
    /// Start angle (radians, normalized to [0, 2π))
    pub start: f32,
    /// Angular width (radians, in [0, 2π])
    pub width: f32,
}

impl ArcSpan {
    pub fn new(start: f32, width: f32) -> Self {
        Self {
            start: normalize_angle(start),
            width: width.clamp(0.0, TAU),
        }
    }

    /// End angle, normalized to [0, 2π)
    #[inline]
    pub fn end(&self) -> f32 {
        normalize_angle(self.start + self.width)
    }

    /// True when the interval crosses the 0/2π seam
    #[inline]
    pub fn wraps(&self) -> bool {
        self.start > self.end()
    }

    /// Check if an angle lies inside the interval, endpoints included
    pub fn contains_angle(&self, theta: f32) -> bool {
        let theta = normalize_angle(theta);
        let start = self.start;
        let end = self.end();

        if start <= end {
            theta >= start && theta <= end
        } else {
            // Wraparound case (e.g., start=350°, end=10°)
            theta >= start || theta <= end
        }
    }

    /// The rest of the circle: from this arc's end back round to its start
    pub fn complement(&self) -> Self {
        Self {
            start: self.end(),
            width: TAU - self.width,
        }
    }

    /// Middle of the interval
    pub fn mid_angle(&self) -> f32 {
        normalize_angle(self.start + self.width / 2.0)
    }

    /// Sample points along the arc at `radius` around `center`
    pub fn sample(&self, center: Vec2, radius: f32, num_points: usize) -> Vec<Vec2> {
        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                center + polar_to_cartesian(radius, self.start + t * self.width)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    fn deg(d: f32) -> f32 {
        d.to_radians()
    }

    #[test]
    fn test_contains_angle_no_wrap() {
        let arc = ArcSpan::new(0.0, PI / 2.0);
        assert!(!arc.wraps());
        assert!(arc.contains_angle(0.0));
        assert!(arc.contains_angle(PI / 4.0));
        assert!(arc.contains_angle(PI / 2.0));
        assert!(!arc.contains_angle(PI));
        assert!(!arc.contains_angle(-PI / 4.0));
    }

    #[test]
    fn test_contains_angle_wraparound() {
        // 350° + 20° ends at 10°
        let arc = ArcSpan::new(deg(350.0), deg(20.0));
        assert!(arc.wraps());
        assert!((arc.end() - deg(10.0)).abs() < 1e-4);
        assert!(arc.contains_angle(deg(355.0)));
        assert!(arc.contains_angle(deg(5.0)));
        assert!(arc.contains_angle(deg(-5.0)));
        assert!(!arc.contains_angle(deg(180.0)));
        assert!(!arc.contains_angle(deg(20.0)));
    }

    #[test]
    fn test_zero_width_contains_only_start() {
        let arc = ArcSpan::new(1.0, 0.0);
        assert!(arc.contains_angle(1.0));
        assert!(!arc.contains_angle(1.1));
    }

    #[test]
    fn test_complement() {
        let gap = ArcSpan::new(deg(350.0), deg(20.0));
        let wall = gap.complement();
        assert!((wall.start - deg(10.0)).abs() < 1e-4);
        assert!((wall.width - deg(340.0)).abs() < 1e-4);
        assert!(wall.contains_angle(deg(180.0)));
        assert!(!wall.contains_angle(deg(0.0)));
    }

    #[test]
    fn test_sample_endpoints() {
        let arc = ArcSpan::new(0.0, PI / 2.0);
        let pts = arc.sample(Vec2::new(10.0, 10.0), 5.0, 3);
        assert_eq!(pts.len(), 3);
        assert!((pts[0] - Vec2::new(15.0, 10.0)).length() < 1e-4);
        assert!((pts[2] - Vec2::new(10.0, 15.0)).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn mid_angle_is_inside(start in -10.0f32..10.0, width in 0.01f32..6.2) {
            let arc = ArcSpan::new(start, width);
            prop_assert!(arc.contains_angle(arc.mid_angle()));
        }

        #[test]
        fn angle_is_in_arc_or_its_complement(start in 0.0f32..6.28, width in 0.01f32..6.2, theta in 0.0f32..6.28) {
            let arc = ArcSpan::new(start, width);
            prop_assert!(arc.contains_angle(theta) || arc.complement().contains_angle(theta));
        }
    }
}
