//! Rendering adapter
//!
//! Turns simulation snapshots into clip-space vertex lists and HUD text for
//! whatever presentation shell draws them. Nothing here touches simulation
//! state.

pub mod shapes;
pub mod vertex;

pub use shapes::{Frame, frame, scene, to_clip_space};
pub use vertex::{Vertex, colors};
