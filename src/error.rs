//! Error types for simulation construction.

use thiserror::Error;

/// Reasons a [`SimConfig`](crate::SimConfig) is rejected.
///
/// Stepping a built simulation never fails; everything that can go wrong is
/// caught here, before any ring exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// At least one ring is required.
    #[error("ring count must be at least 1")]
    NoRings,

    /// Ring stack larger than the simulation will allocate.
    #[error("ring count {count} exceeds the maximum of {max}")]
    TooManyRings {
        /// Requested ring count.
        count: usize,
        /// Largest accepted ring count.
        max: usize,
    },

    /// A length, duration or rate that must be strictly positive is not.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Offending field name.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },

    /// A value that must be a finite number is NaN or infinite.
    #[error("{field} must be finite")]
    NotFinite {
        /// Offending field name.
        field: &'static str,
    },

    /// Gap width must leave some wall.
    #[error("gap angle must be in [0, 360) degrees, got {0}")]
    GapOutOfRange(f32),

    /// Restitution outside [0, 1].
    #[error("restitution must be in [0, 1], got {0}")]
    RestitutionOutOfRange(f32),

    /// Gravity pointing away from the center.
    #[error("gravity strength must not be negative, got {0}")]
    NegativeGravity(f32),

    /// Reading a config file failed.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// A config document could not be parsed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
