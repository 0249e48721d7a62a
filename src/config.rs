//! Simulation parameters
//!
//! Passed once to [`Simulation::new`](crate::Simulation::new) and never read
//! as global state, so differently tuned simulations can coexist.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Which outcome wins when the ball escapes on the same frame time runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TieBreak {
    #[default]
    PreferWin,
    PreferLoss,
}

/// Full parameter set for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === World ===
    /// World width; only used to place the shared center
    pub world_width: f32,
    /// World height; only used to place the shared center
    pub world_height: f32,
    /// Target frame rate for the shell driving `step`
    pub fps: u32,

    // === Ball ===
    pub ball_radius: f32,
    pub initial_velocity: Vec2,

    // === Physics ===
    /// Velocity gained per second toward the center
    pub gravity_strength: f32,
    /// Restitution coefficient shared by every ring
    pub restitution: f32,

    // === Rings ===
    pub ring_count: usize,
    pub initial_ring_radius: f32,
    pub ring_spacing: f32,
    pub ring_thickness: f32,
    /// Gap width in degrees (same for every ring)
    pub gap_angle_degrees: f32,
    /// Innermost ring rotation speed (degrees/sec, signed)
    pub base_rotation_speed_deg: f32,
    /// Added per ring index (degrees/sec)
    pub speed_increment_deg: f32,

    // === Run ===
    /// Time budget in seconds
    pub duration_secs: f32,
    pub tie_break: TieBreak,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            fps: FPS,

            ball_radius: BALL_RADIUS,
            initial_velocity: Vec2::ZERO,

            gravity_strength: GRAVITY_STRENGTH,
            restitution: RESTITUTION,

            ring_count: RING_COUNT,
            initial_ring_radius: INITIAL_RING_RADIUS,
            ring_spacing: RING_SPACING,
            ring_thickness: RING_THICKNESS,
            gap_angle_degrees: GAP_ANGLE_DEGREES,
            base_rotation_speed_deg: BASE_ROTATION_SPEED_DEG,
            speed_increment_deg: SPEED_INCREMENT_DEG,

            duration_secs: DURATION_SECS,
            tie_break: TieBreak::PreferWin,
        }
    }
}

impl SimConfig {
    /// Shared center of gravity and of every ring
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.world_width / 2.0, self.world_height / 2.0)
    }

    /// Gap width in radians
    pub fn gap_angle(&self) -> f32 {
        self.gap_angle_degrees.to_radians()
    }

    /// Radius of ring `index` (0 = innermost)
    pub fn ring_radius(&self, index: usize) -> f32 {
        self.initial_ring_radius + index as f32 * self.ring_spacing
    }

    /// Rotation rate of ring `index` in radians/sec
    pub fn ring_rotation_rate(&self, index: usize) -> f32 {
        (self.base_rotation_speed_deg + index as f32 * self.speed_increment_deg).to_radians()
    }

    /// Fixed frame delta for a shell running at `fps`
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Check every construction precondition
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("ball_radius", self.ball_radius),
            ("initial_velocity.x", self.initial_velocity.x),
            ("initial_velocity.y", self.initial_velocity.y),
            ("gravity_strength", self.gravity_strength),
            ("restitution", self.restitution),
            ("initial_ring_radius", self.initial_ring_radius),
            ("ring_spacing", self.ring_spacing),
            ("ring_thickness", self.ring_thickness),
            ("gap_angle_degrees", self.gap_angle_degrees),
            ("base_rotation_speed_deg", self.base_rotation_speed_deg),
            ("speed_increment_deg", self.speed_increment_deg),
            ("duration_secs", self.duration_secs),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }

        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("ball_radius", self.ball_radius),
            ("initial_ring_radius", self.initial_ring_radius),
            ("ring_spacing", self.ring_spacing),
            ("ring_thickness", self.ring_thickness),
            ("duration_secs", self.duration_secs),
            ("fps", self.fps as f32),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NotPositive { field, value });
        }

        if self.ring_count == 0 {
            return Err(ConfigError::NoRings);
        }
        if self.ring_count > MAX_RING_COUNT {
            return Err(ConfigError::TooManyRings {
                count: self.ring_count,
                max: MAX_RING_COUNT,
            });
        }
        if !(0.0..360.0).contains(&self.gap_angle_degrees) {
            return Err(ConfigError::GapOutOfRange(self.gap_angle_degrees));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::RestitutionOutOfRange(self.restitution));
        }
        if self.gravity_strength < 0.0 {
            return Err(ConfigError::NegativeGravity(self.gravity_strength));
        }

        Ok(())
    }

    /// Parse a (possibly partial) JSON document over the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.center(), Vec2::new(500.0, 400.0));
    }

    #[test]
    fn test_ring_layout() {
        let config = SimConfig::default();
        assert_eq!(config.ring_radius(0), 50.0);
        assert_eq!(config.ring_radius(4), 150.0);
        assert!((config.ring_rotation_rate(0) - 5.0_f32.to_radians()).abs() < 1e-6);
        assert!((config.ring_rotation_rate(10) - 7.0_f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_negative_speed_keeps_sign() {
        let config = SimConfig {
            base_rotation_speed_deg: -30.0,
            speed_increment_deg: -5.0,
            ..Default::default()
        };
        assert!(config.ring_rotation_rate(0) < 0.0);
        assert!(config.ring_rotation_rate(3).abs() > config.ring_rotation_rate(0).abs());
    }

    #[test]
    fn test_rejects_zero_rings() {
        let config = SimConfig {
            ring_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoRings)));
    }

    #[test]
    fn test_rejects_oversized_ring_stack() {
        let at_cap = SimConfig {
            ring_count: MAX_RING_COUNT,
            ..Default::default()
        };
        assert!(at_cap.validate().is_ok());

        let config = SimConfig {
            ring_count: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyRings { count: usize::MAX, max: MAX_RING_COUNT })
        ));
        assert!(crate::Simulation::new(config).is_err());
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let config = SimConfig {
            initial_ring_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "initial_ring_radius",
                ..
            })
        ));

        let config = SimConfig {
            ball_radius: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "ball_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_full_circle_gap() {
        let config = SimConfig {
            gap_angle_degrees: 360.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::GapOutOfRange(_))));
    }

    #[test]
    fn test_rejects_bad_restitution_and_nan() {
        let config = SimConfig {
            restitution: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RestitutionOutOfRange(_))
        ));

        let config = SimConfig {
            gravity_strength: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "gravity_strength"
            })
        ));
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config =
            SimConfig::from_json(r#"{ "ring_count": 3, "initial_velocity": [1.5, -2.0] }"#)
                .unwrap();
        assert_eq!(config.ring_count, 3);
        assert_eq!(config.initial_velocity, Vec2::new(1.5, -2.0));
        assert_eq!(config.ring_spacing, RING_SPACING);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            SimConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            SimConfig::from_json(r#"{ "ring_count": 0 }"#),
            Err(ConfigError::NoRings)
        ));
    }

    #[test]
    fn test_tie_break_from_json() {
        let config = SimConfig::from_json(r#"{"tie_break": "PreferLoss"}"#).unwrap();
        assert_eq!(config.tie_break, TieBreak::PreferLoss);
        assert_eq!(SimConfig::from_json("{}").unwrap().tie_break, TieBreak::PreferWin);
        assert!(matches!(
            SimConfig::from_json(r#"{"tie_break": "Draw"}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
