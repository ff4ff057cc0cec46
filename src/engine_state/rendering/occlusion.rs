//! Ambient occlusion for block face corners.
//!
//! Each corner of a visible face looks at three cells just outside the face: the two
//! cells sharing an edge with the corner and the one diagonal cell. Two occupied edge
//! cells saturate the corner to the darkest level no matter what the diagonal holds.

use crate::engine_state::voxels::world::World;

use super::face::Face;

/// Darkest occlusion level.
pub const MAX_OCCLUSION_LEVEL: u8 = 3;

/// Computes the occlusion level (0-3) of a corner from its three samples.
pub fn occlusion_level(edge1: bool, edge2: bool, diagonal: bool) -> u8 {
    if edge1 && edge2 {
        return MAX_OCCLUSION_LEVEL;
    }
    edge1 as u8 + edge2 as u8 + diagonal as u8
}

/// Maps an occlusion level to the RGB multiplier applied to the corner's vertex.
pub fn brightness_for_level(level: u8) -> f32 {
    match level {
        0 => 1.0,
        1 => 0.8,
        2 => 0.6,
        3 => 0.4,
        _ => 1.0,
    }
}

/// Occlusion levels of the four corners of `face`, in winding order.
pub fn face_occlusion(world: &World, face: &Face) -> [u8; 4] {
    std::array::from_fn(|i| {
        let [edge1, edge2, diagonal] = face
            .occlusion_samples(i)
            .map(|cell| world.get_block_at(cell).is_solid());
        occlusion_level(edge1, edge2, diagonal)
    })
}

/// Per-corner brightness of `face`, in winding order.
pub fn face_brightness(world: &World, face: &Face) -> [f32; 4] {
    face_occlusion(world, face).map(brightness_for_level)
}
