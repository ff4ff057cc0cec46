//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a dense `CHUNK_WIDTH x CHUNK_HEIGHT x
//! CHUNK_LENGTH` array of block types anchored at a world-space origin.
//!
//! ## Storage Order
//!
//! Blocks are stored X-major, then Y, with Z varying fastest:
//! `index = (x * CHUNK_HEIGHT + y) * CHUNK_LENGTH + z`. This is also the order in
//! which blocks are written to world files, so a chunk's storage can be serialized
//! as one contiguous byte slice.

use cgmath::{Point3, Vector3};

use super::block::block_type::BlockType;

pub mod chunk_iteration;

use chunk_iteration::ChunkBlockIterator;

/// The size of a chunk along the X axis, in blocks.
pub const CHUNK_WIDTH: i32 = 16;
/// The size of a chunk along the Y axis, in blocks. The world is not chunked vertically.
pub const CHUNK_HEIGHT: i32 = 32;
/// The size of a chunk along the Z axis, in blocks.
pub const CHUNK_LENGTH: i32 = 16;
/// The total number of blocks in a chunk.
pub const CHUNK_VOLUME: usize = (CHUNK_WIDTH * CHUNK_HEIGHT * CHUNK_LENGTH) as usize;

/// Identifies a chunk by the X and Z coordinates of its origin.
///
/// These are world coordinates (multiples of the chunk dimensions), not grid indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkKey {
    /// Origin X, a multiple of `CHUNK_WIDTH`
    pub x: i32,
    /// Origin Z, a multiple of `CHUNK_LENGTH`
    pub z: i32,
}

impl ChunkKey {
    /// Returns the key of the chunk that owns the world position `pos`.
    ///
    /// Uses floor division so negative coordinates map towards negative infinity.
    pub fn containing(pos: Point3<i32>) -> Self {
        ChunkKey {
            x: pos.x.div_euclid(CHUNK_WIDTH) * CHUNK_WIDTH,
            z: pos.z.div_euclid(CHUNK_LENGTH) * CHUNK_LENGTH,
        }
    }

    /// The chunk origin this key names.
    pub fn origin(self) -> Point3<i32> {
        Point3::new(self.x, 0, self.z)
    }

    /// Returns `true` if `pos` is a chunk origin: on the X/Z grid with `y == 0`.
    pub fn is_origin(pos: Point3<i32>) -> bool {
        Self::containing(pos).origin() == pos
    }
}

/// A fixed-size column of voxel blocks in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// World position of the chunk's minimum corner. Always chunk-aligned with `y == 0`.
    pub position: Point3<i32>,

    /// Whether the chunk takes part in rendering.
    pub loaded: bool,

    /// Dense block storage, `CHUNK_VOLUME` entries in storage order.
    blocks: Box<[BlockType]>,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air) marked as loaded.
    ///
    /// # Arguments
    /// * `position` - The world-space origin of the chunk
    pub fn empty(position: Point3<i32>) -> Self {
        Chunk {
            position,
            loaded: true,
            blocks: vec![BlockType::AIR; CHUNK_VOLUME].into_boxed_slice(),
        }
    }

    /// Creates a chunk from blocks already in storage order.
    ///
    /// # Returns
    /// `None` if `blocks` does not hold exactly `CHUNK_VOLUME` entries.
    pub fn from_blocks(position: Point3<i32>, blocks: Vec<BlockType>) -> Option<Self> {
        if blocks.len() != CHUNK_VOLUME {
            return None;
        }
        Some(Chunk {
            position,
            loaded: true,
            blocks: blocks.into_boxed_slice(),
        })
    }

    /// The key this chunk is indexed under in the world.
    pub fn key(&self) -> ChunkKey {
        ChunkKey {
            x: self.position.x,
            z: self.position.z,
        }
    }

    /// All blocks in storage order.
    pub fn blocks(&self) -> &[BlockType] {
        &self.blocks
    }

    /// Maps chunk-relative coordinates to a storage index.
    ///
    /// # Returns
    /// `None` if any coordinate is outside the chunk.
    pub fn index_of(x: i32, y: i32, z: i32) -> Option<usize> {
        if !(0..CHUNK_WIDTH).contains(&x)
            || !(0..CHUNK_HEIGHT).contains(&y)
            || !(0..CHUNK_LENGTH).contains(&z)
        {
            return None;
        }
        Some(((x * CHUNK_HEIGHT + y) * CHUNK_LENGTH + z) as usize)
    }

    /// Gets the block at the specified chunk-relative coordinates.
    ///
    /// # Returns
    /// `None` if the coordinates are out of bounds.
    pub fn get_block_at(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        Self::index_of(x, y, z).map(|i| self.blocks[i])
    }

    /// Sets the block at the specified chunk-relative coordinates.
    ///
    /// # Returns
    /// `true` if the coordinates were in bounds and the cell was written.
    pub fn set_block_at(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) -> bool {
        match Self::index_of(x, y, z) {
            Some(i) => {
                self.blocks[i] = block_type;
                true
            }
            None => false,
        }
    }

    /// Converts chunk-relative coordinates to a world position.
    pub fn to_world(&self, local: Point3<usize>) -> Point3<i32> {
        self.position + Vector3::new(local.x as i32, local.y as i32, local.z as i32)
    }

    /// Iterates over every non-air block with its chunk-relative position.
    pub fn iter_blocks(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }

    /// Counts the non-air blocks in this chunk.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_use_floor_division() {
        assert_eq!(ChunkKey::containing(Point3::new(0, 0, 0)), ChunkKey { x: 0, z: 0 });
        assert_eq!(ChunkKey::containing(Point3::new(15, 3, 15)), ChunkKey { x: 0, z: 0 });
        assert_eq!(ChunkKey::containing(Point3::new(16, 3, 31)), ChunkKey { x: 16, z: 16 });
        assert_eq!(ChunkKey::containing(Point3::new(-1, 0, -16)), ChunkKey { x: -16, z: -16 });
        assert_eq!(ChunkKey::containing(Point3::new(-17, 0, -15)), ChunkKey { x: -32, z: -16 });
    }

    #[test]
    fn storage_order_is_x_then_y_then_z() {
        assert_eq!(Chunk::index_of(0, 0, 0), Some(0));
        assert_eq!(Chunk::index_of(0, 0, 1), Some(1));
        assert_eq!(Chunk::index_of(0, 1, 0), Some(CHUNK_LENGTH as usize));
        assert_eq!(
            Chunk::index_of(1, 0, 0),
            Some((CHUNK_HEIGHT * CHUNK_LENGTH) as usize)
        );
        assert_eq!(
            Chunk::index_of(CHUNK_WIDTH - 1, CHUNK_HEIGHT - 1, CHUNK_LENGTH - 1),
            Some(CHUNK_VOLUME - 1)
        );
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let mut chunk = Chunk::empty(Point3::new(0, 0, 0));
        assert_eq!(chunk.get_block_at(-1, 0, 0), None);
        assert_eq!(chunk.get_block_at(0, CHUNK_HEIGHT, 0), None);
        assert_eq!(chunk.get_block_at(0, 0, CHUNK_LENGTH), None);
        assert!(!chunk.set_block_at(CHUNK_WIDTH, 0, 0, BlockType::STONE));
        assert_eq!(chunk.solid_count(), 0);
    }

    #[test]
    fn set_then_get() {
        let mut chunk = Chunk::empty(Point3::new(16, 0, -16));
        assert!(chunk.set_block_at(3, 4, 5, BlockType::GRATE));
        assert_eq!(chunk.get_block_at(3, 4, 5), Some(BlockType::GRATE));
        assert_eq!(chunk.to_world(Point3::new(3, 4, 5)), Point3::new(19, 4, -11));
        assert_eq!(chunk.key(), ChunkKey { x: 16, z: -16 });
    }

    #[test]
    fn from_blocks_checks_length() {
        let origin = Point3::new(0, 0, 0);
        assert!(Chunk::from_blocks(origin, vec![BlockType::AIR; 10]).is_none());
        let chunk = Chunk::from_blocks(origin, vec![BlockType::DIRT; CHUNK_VOLUME]).unwrap();
        assert!(chunk.loaded);
        assert_eq!(chunk.solid_count(), CHUNK_VOLUME);
    }
}
