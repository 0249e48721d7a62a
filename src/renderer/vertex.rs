//! Colored 2D vertices, laid out for direct upload as raw bytes

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// RGBA in 0..1
pub type Color = [f32; 4];

/// Position (world pixels, or clip space after [`super::to_clip_space`]) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub fn at(pos: Vec2, color: Color) -> Self {
        Self {
            position: pos.to_array(),
            color,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }
}

/// Byte view of a vertex list, 24 bytes per vertex
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Scene palette
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const BALL: Color = [1.0, 100.0 / 255.0, 1.0, 1.0]; // Hot pink
    pub const RING: Color = [0.0, 200.0 / 255.0, 200.0 / 255.0, 1.0]; // Cyan
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const WIN_MESSAGE: Color = [0.0, 1.0, 0.0, 1.0];
    pub const LOSE_MESSAGE: Color = [1.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_view_is_tightly_packed() {
        let verts = [
            Vertex::at(Vec2::new(1.0, 2.0), colors::BALL),
            Vertex::at(Vec2::new(3.0, 4.0), colors::RING),
        ];
        let bytes = as_bytes(&verts);
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(bytes.len(), 48);

        // Color follows position within each vertex
        let back: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(&back[..6], &[1.0, 2.0, 1.0, 100.0 / 255.0, 1.0, 1.0]);
        assert_eq!(verts[1].pos(), Vec2::new(3.0, 4.0));
    }
}
