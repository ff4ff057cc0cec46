//! # Terrain Generation Module
//!
//! Builds chunks from a 2D heightmap sampled from a noise source.
//!
//! Each `(x, z)` column samples `noise(x * 0.1, 0, z * 0.1)` and maps the result to a
//! column height. Columns are filled bottom-up: bedrock on layer 0, stone in the body,
//! one layer of dirt and a grass cap. Everything above the cap stays air.

use cgmath::Point3;
use noise::NoiseFn;

use super::{
    block::block_type::BlockType,
    chunk::{Chunk, CHUNK_HEIGHT, CHUNK_LENGTH, CHUNK_WIDTH},
    perlin::PerlinNoise,
};

/// Scaling factor applied to world X/Z coordinates when sampling noise.
pub const TERRAIN_FREQUENCY: f64 = 0.1;

/// Maps a noise sample in `[-1, 1]` to a column height in `[1, CHUNK_HEIGHT]`.
pub fn column_height_from_noise(sample: f64) -> i32 {
    let span = ((CHUNK_HEIGHT / 2) - 4) as f64;
    let height = ((sample + 1.0) * 0.5 * span).round() as i32 + 2;
    height.clamp(1, CHUNK_HEIGHT)
}

/// The block at layer `y` of a column whose filled part is `height` blocks tall.
pub fn layer_block(y: i32, height: i32) -> BlockType {
    if y < 0 || y >= height {
        BlockType::AIR
    } else if y == 0 {
        BlockType::BEDROCK
    } else if y == height - 1 {
        BlockType::GRASS
    } else if y == height - 2 {
        BlockType::DIRT
    } else {
        BlockType::STONE
    }
}

/// Generates chunks from a heightmap noise source.
#[derive(Clone, Debug)]
pub struct TerrainGenerator<N = PerlinNoise> {
    noise: N,
}

impl<N: NoiseFn<f64, 3>> TerrainGenerator<N> {
    /// Creates a generator sampling `noise`.
    pub fn new(noise: N) -> Self {
        TerrainGenerator { noise }
    }

    /// Height of the column at world position `(world_x, world_z)`.
    pub fn column_height(&self, world_x: i32, world_z: i32) -> i32 {
        let sample = self.noise.get([
            world_x as f64 * TERRAIN_FREQUENCY,
            0.0,
            world_z as f64 * TERRAIN_FREQUENCY,
        ]);
        column_height_from_noise(sample)
    }

    /// Generates the chunk whose minimum corner is at `origin`.
    pub fn generate_chunk(&self, origin: Point3<i32>) -> Chunk {
        let mut chunk = Chunk::empty(origin);

        for x in 0..CHUNK_WIDTH {
            for z in 0..CHUNK_LENGTH {
                let height = self.column_height(origin.x + x, origin.z + z);
                for y in 0..height {
                    chunk.set_block_at(x, y, z, layer_block(y, height));
                }
            }
        }

        chunk
    }
}
