//! # World Module
//!
//! This module provides the `World` struct which manages the collection of chunks in the
//! voxel world and translates world positions into chunk-local coordinates.
//!
//! ## Coordinate Mapping
//!
//! A world position `(px, py, pz)` belongs to the chunk with origin
//! `(floor(px / W) * W, 0, floor(pz / L) * L)`. The local position inside that chunk is
//! `(px - originX, py, pz - originZ)`. The world is only chunked in X and Z.
//!
//! ## Storage
//!
//! Chunks are kept in insertion order so saving and loading reproduces the same
//! sequence. A hash map from [`ChunkKey`] to the chunk's index gives O(1) lookup.
//!
//! ## Error Handling
//!
//! Queries never fail: positions outside any chunk, or outside the vertical range,
//! read as air and ignore writes.

use std::collections::HashMap;

use cgmath::Point3;
use log::{debug, info, warn};
use noise::NoiseFn;

use super::{
    block::block_type::BlockType,
    chunk::{Chunk, ChunkKey, CHUNK_LENGTH, CHUNK_WIDTH},
    terrain::TerrainGenerator,
};

/// A voxel world composed of chunks laid out on the X/Z plane.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::{BlockType, Chunk, World};
///
/// let mut world = World::new();
/// world.add_chunk(Chunk::empty(Point3::new(-16, 0, 0)));
///
/// world.set_block_at(Point3::new(-1, 4, 2), BlockType::STONE);
/// assert_eq!(world.get_block_at(Point3::new(-1, 4, 2)), BlockType::STONE);
/// assert_eq!(world.get_block_at(Point3::new(-1, -1, 2)), BlockType::AIR);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct World {
    /// Chunks in insertion order.
    chunks: Vec<Chunk>,
    /// Maps chunk origins to indices into `chunks`.
    index: HashMap<ChunkKey, usize>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new() -> Self {
        World {
            chunks: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds a chunk to the world.
    ///
    /// # Returns
    /// `false` (and drops `chunk`) if its position is not a chunk origin or a chunk with
    /// the same origin already exists.
    pub fn add_chunk(&mut self, chunk: Chunk) -> bool {
        if !ChunkKey::is_origin(chunk.position) {
            warn!("Rejected chunk at misaligned origin {:?}", chunk.position);
            return false;
        }
        let key = chunk.key();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.chunks.len());
        self.chunks.push(chunk);
        true
    }

    /// All chunks in insertion order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Number of chunks in the world.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns `true` if the world holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns `true` if a chunk is indexed under `key`.
    pub fn contains_chunk(&self, key: ChunkKey) -> bool {
        self.index.contains_key(&key)
    }

    /// Retrieves the chunk with the given origin key.
    pub fn get_chunk(&self, key: ChunkKey) -> Option<&Chunk> {
        self.index.get(&key).map(|&i| &self.chunks[i])
    }

    /// Retrieves the chunk with the given origin key for modification.
    pub fn get_chunk_mut(&mut self, key: ChunkKey) -> Option<&mut Chunk> {
        match self.index.get(&key) {
            Some(&i) => Some(&mut self.chunks[i]),
            None => None,
        }
    }

    /// Splits a world position into the owning chunk's key and the local position.
    pub fn locate(pos: Point3<i32>) -> (ChunkKey, Point3<i32>) {
        let key = ChunkKey::containing(pos);
        (key, Point3::new(pos.x - key.x, pos.y, pos.z - key.z))
    }

    /// Returns the block at a world position.
    ///
    /// Air is returned if no chunk owns the position or it lies outside the chunk's
    /// vertical range.
    pub fn get_block_at(&self, pos: Point3<i32>) -> BlockType {
        let (key, local) = Self::locate(pos);
        self.get_chunk(key)
            .and_then(|chunk| chunk.get_block_at(local.x, local.y, local.z))
            .unwrap_or(BlockType::AIR)
    }

    /// Overwrites the block at a world position.
    ///
    /// No chunk is created implicitly; writes outside existing chunks are ignored.
    ///
    /// # Returns
    /// `true` if a cell was written.
    pub fn set_block_at(&mut self, pos: Point3<i32>, block_type: BlockType) -> bool {
        let (key, local) = Self::locate(pos);
        self.get_chunk_mut(key)
            .is_some_and(|chunk| chunk.set_block_at(local.x, local.y, local.z, block_type))
    }

    /// Populates a `grid_size x grid_size` grid of chunks starting at the origin.
    ///
    /// Chunk origins are `(x * CHUNK_WIDTH, 0, z * CHUNK_LENGTH)` for `x, z` in
    /// `0..grid_size`. Origins that already hold a chunk are left untouched. A grid whose
    /// far corner does not fit in `i32` coordinates is rejected with a warning.
    pub fn init_world<N: NoiseFn<f64, 3>>(
        &mut self,
        grid_size: u32,
        generator: &TerrainGenerator<N>,
    ) {
        let max_grid_size = i32::MAX / CHUNK_WIDTH.max(CHUNK_LENGTH);
        let grid_size = match i32::try_from(grid_size) {
            Ok(size) if size <= max_grid_size => size,
            _ => {
                warn!(
                    "Grid size {} exceeds the coordinate range (at most {}), nothing generated",
                    grid_size, max_grid_size
                );
                return;
            }
        };
        let mut generated = 0;

        for x in 0..grid_size {
            for z in 0..grid_size {
                let origin = Point3::new(x * CHUNK_WIDTH, 0, z * CHUNK_LENGTH);
                let key = ChunkKey::containing(origin);
                if self.contains_chunk(key) {
                    debug!("Chunk at {:?} already exists, skipping generation", key);
                    continue;
                }
                self.add_chunk(generator.generate_chunk(origin));
                generated += 1;
            }
        }

        info!(
            "Generated {} chunks ({}x{} grid), world now holds {}",
            generated,
            grid_size,
            grid_size,
            self.len()
        );
    }
}
