//! Property tests for world coordinate mapping and block edits.

use cgmath::Point3;
use proptest::prelude::*;
use voxel_world::{
    read_world, BlockType, Chunk, ChunkKey, PerlinNoise, TerrainGenerator, World, CHUNK_HEIGHT,
    CHUNK_LENGTH, CHUNK_WIDTH,
};

/// A 4x4 grid of empty chunks centered on the origin, covering x and z in [-32, 32).
fn centered_world() -> World {
    let mut world = World::new();
    for cx in -2..2 {
        for cz in -2..2 {
            world.add_chunk(Chunk::empty(Point3::new(cx * CHUNK_WIDTH, 0, cz * CHUNK_LENGTH)));
        }
    }
    world
}

fn any_block_type() -> impl Strategy<Value = BlockType> {
    prop::sample::select(BlockType::ALL.to_vec())
}

proptest! {
    /// Property: a written block reads back at the same position
    #[test]
    fn set_then_get_round_trips(
        x in -32i32..32,
        y in 0..CHUNK_HEIGHT,
        z in -32i32..32,
        block_type in any_block_type(),
    ) {
        let mut world = centered_world();
        let pos = Point3::new(x, y, z);
        prop_assert!(world.set_block_at(pos, block_type));
        prop_assert_eq!(world.get_block_at(pos), block_type);
    }

    /// Property: writing the same block twice leaves the world as one write does
    #[test]
    fn set_is_idempotent(
        x in -32i32..32,
        y in 0..CHUNK_HEIGHT,
        z in -32i32..32,
        block_type in any_block_type(),
    ) {
        let pos = Point3::new(x, y, z);
        let mut once = centered_world();
        once.set_block_at(pos, block_type);
        let mut twice = once.clone();
        twice.set_block_at(pos, block_type);
        prop_assert_eq!(once, twice);
    }

    /// Property: a write only touches its own cell
    #[test]
    fn set_does_not_disturb_other_cells(
        x in -32i32..32,
        y in 0..CHUNK_HEIGHT,
        z in -32i32..32,
        dx in -2i32..=2,
        dy in -2i32..=2,
        dz in -2i32..=2,
    ) {
        prop_assume!((dx, dy, dz) != (0, 0, 0));
        let mut world = centered_world();
        world.set_block_at(Point3::new(x, y, z), BlockType::STONE);
        prop_assert_eq!(
            world.get_block_at(Point3::new(x + dx, y + dy, z + dz)),
            BlockType::AIR
        );
    }

    /// Property: every position maps to an aligned chunk origin and an in-range local offset
    #[test]
    fn locate_is_consistent(x in -100_000i32..100_000, y in -64i32..64, z in -100_000i32..100_000) {
        let (key, local) = World::locate(Point3::new(x, y, z));
        prop_assert_eq!(key.x.rem_euclid(CHUNK_WIDTH), 0);
        prop_assert_eq!(key.z.rem_euclid(CHUNK_LENGTH), 0);
        prop_assert!((0..CHUNK_WIDTH).contains(&local.x));
        prop_assert!((0..CHUNK_LENGTH).contains(&local.z));
        prop_assert_eq!(local.y, y);
        prop_assert_eq!(key.x + local.x, x);
        prop_assert_eq!(key.z + local.z, z);
        prop_assert_eq!(ChunkKey::containing(key.origin()), key);
    }

    /// Property: positions outside the vertical range always read as air
    #[test]
    fn outside_vertical_range_is_air(
        x in -32i32..32,
        z in -32i32..32,
        below in 1i32..1000,
        above in 0i32..1000,
    ) {
        let mut world = centered_world();
        for y in 0..CHUNK_HEIGHT {
            world.set_block_at(Point3::new(x, y, z), BlockType::BEDROCK);
        }
        prop_assert_eq!(world.get_block_at(Point3::new(x, -below, z)), BlockType::AIR);
        prop_assert_eq!(
            world.get_block_at(Point3::new(x, CHUNK_HEIGHT + above, z)),
            BlockType::AIR
        );
    }

    /// Property: arbitrary bytes never crash the world reader
    #[test]
    fn arbitrary_bytes_dont_crash_reader(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _result = read_world(&mut bytes.as_slice());
    }

    /// Property: noise is deterministic per seed and stays in range
    #[test]
    fn noise_is_deterministic(
        seed in any::<u32>(),
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        z in -1000.0f64..1000.0,
    ) {
        let a = PerlinNoise::new(seed).noise(x, y, z);
        let b = PerlinNoise::new(seed).noise(x, y, z);
        prop_assert_eq!(a, b);
        prop_assert!((-1.1..=1.1).contains(&a));
    }
}

#[test]
fn different_seeds_give_different_terrain() {
    let origin = Point3::new(0, 0, 0);
    let a = TerrainGenerator::new(PerlinNoise::new(1)).generate_chunk(origin);
    let b = TerrainGenerator::new(PerlinNoise::new(2)).generate_chunk(origin);
    assert_ne!(a, b);
}

#[test]
fn edge_of_the_vertical_range() {
    let mut world = centered_world();
    world.set_block_at(Point3::new(0, 0, 0), BlockType::STONE);
    world.set_block_at(Point3::new(0, CHUNK_HEIGHT - 1, 0), BlockType::STONE);
    assert_eq!(world.get_block_at(Point3::new(0, -1, 0)), BlockType::AIR);
    assert_eq!(world.get_block_at(Point3::new(0, CHUNK_HEIGHT, 0)), BlockType::AIR);
}
