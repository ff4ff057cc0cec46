//! Face visibility.
//!
//! A face is drawn when the neighbor it looks into is air. Blocks the registry marks as
//! transparent always draw all six faces.

use cgmath::Point3;

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, registry::BlockRegistry},
    world::World,
};

/// Per-face visibility, indexed by `BlockSide as usize`.
pub type FaceVisibility = [bool; 6];

/// Determines which faces of the block at `position` should be drawn.
///
/// Air blocks have no visible faces.
pub fn visible_sides(
    world: &World,
    registry: &BlockRegistry,
    position: Point3<i32>,
) -> FaceVisibility {
    let block_type = world.get_block_at(position);
    if !block_type.is_solid() {
        return [false; 6];
    }
    if registry.is_transparent(block_type) {
        return [true; 6];
    }

    let mut visibility = [false; 6];
    for side in BlockSide::all() {
        visibility[side as usize] = !world.get_block_at(position + side.normal()).is_solid();
    }
    visibility
}

/// Number of visible faces in a visibility mask.
pub fn count_visible(visibility: &FaceVisibility) -> usize {
    visibility.iter().filter(|v| **v).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::{
        rendering::RecordingRenderer,
        voxels::{block::block_type::BlockType, chunk::Chunk},
    };

    fn setup() -> (World, BlockRegistry) {
        let mut world = World::new();
        world.add_chunk(Chunk::empty(Point3::new(0, 0, 0)));
        let mut registry = BlockRegistry::new(".");
        registry.initialize_defaults(&mut RecordingRenderer::default());
        (world, registry)
    }

    #[test]
    fn isolated_block_shows_every_face() {
        let (mut world, registry) = setup();
        world.set_block_at(Point3::new(8, 8, 8), BlockType::STONE);
        assert_eq!(visible_sides(&world, &registry, Point3::new(8, 8, 8)), [true; 6]);
    }

    #[test]
    fn air_has_no_faces() {
        let (world, registry) = setup();
        assert_eq!(visible_sides(&world, &registry, Point3::new(8, 8, 8)), [false; 6]);
    }

    #[test]
    fn neighbor_hides_the_shared_face() {
        let (mut world, registry) = setup();
        world.set_block_at(Point3::new(8, 8, 8), BlockType::STONE);
        world.set_block_at(Point3::new(8, 9, 8), BlockType::DIRT);

        let visibility = visible_sides(&world, &registry, Point3::new(8, 8, 8));
        assert!(!visibility[BlockSide::TOP as usize]);
        assert_eq!(count_visible(&visibility), 5);

        let above = visible_sides(&world, &registry, Point3::new(8, 9, 8));
        assert!(!above[BlockSide::BOTTOM as usize]);
    }

    #[test]
    fn enclosed_block_shows_nothing_unless_transparent() {
        let (mut world, registry) = setup();
        let center = Point3::new(8, 8, 8);
        world.set_block_at(center, BlockType::STONE);
        for side in BlockSide::all() {
            world.set_block_at(center + side.normal(), BlockType::STONE);
        }
        assert_eq!(count_visible(&visible_sides(&world, &registry, center)), 0);

        world.set_block_at(center, BlockType::LEAVES);
        assert_eq!(visible_sides(&world, &registry, center), [true; 6]);
    }

    #[test]
    fn faces_at_the_world_edge_are_visible() {
        let (mut world, registry) = setup();
        world.set_block_at(Point3::new(0, 0, 0), BlockType::BEDROCK);
        let visibility = visible_sides(&world, &registry, Point3::new(0, 0, 0));
        assert!(visibility[BlockSide::BOTTOM as usize]);
        assert!(visibility[BlockSide::LEFT as usize]);
        assert!(visibility[BlockSide::BACK as usize]);
    }
}
