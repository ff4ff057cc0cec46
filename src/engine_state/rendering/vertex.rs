//! Vertex data structures for quads handed to the rendering collaborator.

use cgmath::{Point3, Vector3};

use crate::engine_state::rendering::TextureHandle;

/// A vertex of a shaded, textured block face.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
/// - Color: [f32; 4] (16 bytes)
///
/// Total size: 36 bytes, so a slice of vertices can be uploaded with
/// `bytemuck::cast_slice` by whichever backend consumes it.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Corner position in world space
    pub position: [f32; 3],
    /// UV texture coordinates (0.0-1.0)
    pub tex_coords: [f32; 2],
    /// RGBA color scale. RGB carry the ambient occlusion brightness, alpha is always 1.
    pub color: [f32; 4],
}

impl QuadVertex {
    /// Creates a vertex whose RGB channels are all scaled by `brightness`.
    pub fn new(position: Point3<f32>, tex_coords: [f32; 2], brightness: f32) -> Self {
        QuadVertex {
            position: [position.x, position.y, position.z],
            tex_coords,
            color: [brightness, brightness, brightness, 1.0],
        }
    }

    /// The ambient occlusion multiplier carried by this vertex.
    pub fn brightness(&self) -> f32 {
        self.color[0]
    }
}

/// Everything needed to draw one block face: four corners, a normal and a texture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadDraw {
    /// Texture resolved through the block registry
    pub texture: TextureHandle,
    /// Outward facing unit normal
    pub normal: Vector3<f32>,
    /// The four corners in winding order
    pub vertices: [QuadVertex; 4],
}

impl QuadDraw {
    /// Per-vertex brightness in corner order.
    pub fn brightness(&self) -> [f32; 4] {
        self.vertices.map(|v| v.brightness())
    }

    /// Corner positions in winding order.
    pub fn corners(&self) -> [Point3<f32>; 4] {
        self.vertices.map(|v| Point3::from(v.position))
    }
}
