//! Frame-stepped simulation module
//!
//! All physics lives here. This module must stay free of drawing:
//! - One `step(dt)` per frame, run to completion on the caller's thread
//! - Rings processed in index order (innermost first)
//! - Presentation reads copied snapshots only

pub mod arc;
pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use arc::ArcSpan;
pub use collision::{Contact, ball_ring_contact, reflect_velocity, resolve_ring_collision};
pub use snapshot::{BallView, RingView, Snapshot};
pub use state::{Ball, Outcome, Ring, Simulation};
