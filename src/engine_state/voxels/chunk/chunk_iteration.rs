//! # Chunk Iteration Module
//!
//! This module provides an iterator for traversing all non-air blocks in a chunk.
//!
//! The `ChunkBlockIterator` walks the dense block array in storage order and skips air,
//! tracking the local X/Y/Z position alongside the flat index so callers never have to
//! invert the index mapping.

use cgmath::Point3;

use crate::engine_state::voxels::block::block_type::BlockType;

use super::{Chunk, CHUNK_HEIGHT, CHUNK_LENGTH};

/// An iterator over all non-air blocks in a chunk.
///
/// Yields `(local_position, block_type)` pairs in storage order (X-major, Z fastest).
pub struct ChunkBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Current position in the block array
    current_offset: usize,
    /// Current X position within the chunk
    local_x: usize,
    /// Current Y position within the chunk
    local_y: usize,
    /// Current Z position within the chunk
    local_z: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` positioned at the start of the chunk.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            current_offset: 0,
            local_x: 0,
            local_y: 0,
            local_z: 0,
        }
    }

    /// Moves the local position one cell forward in storage order.
    fn advance(&mut self) {
        self.current_offset += 1;
        self.local_z += 1;

        // End of a Z run, move to the next row
        if self.local_z == CHUNK_LENGTH as usize {
            self.local_z = 0;
            self.local_y += 1;

            // End of a Y column, move to the next X slice
            if self.local_y == CHUNK_HEIGHT as usize {
                self.local_y = 0;
                self.local_x += 1;
            }
        }
    }
}

impl<'a> Iterator for ChunkBlockIterator<'a> {
    type Item = (Point3<usize>, BlockType);

    fn next(&mut self) -> Option<Self::Item> {
        let blocks = self.chunk_ref.blocks();
        while self.current_offset < blocks.len() {
            let block_type = blocks[self.current_offset];
            let position = Point3::new(self.local_x, self.local_y, self.local_z);
            self.advance();

            if block_type.is_solid() {
                return Some((position, block_type));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chunk_yields_nothing() {
        let chunk = Chunk::empty(Point3::new(0, 0, 0));
        assert_eq!(chunk.iter_blocks().count(), 0);
    }

    #[test]
    fn yields_positions_in_storage_order() {
        let mut chunk = Chunk::empty(Point3::new(0, 0, 0));
        chunk.set_block_at(15, 31, 15, BlockType::GRASS);
        chunk.set_block_at(0, 0, 1, BlockType::BEDROCK);
        chunk.set_block_at(2, 1, 0, BlockType::STONE);

        let found: Vec<_> = chunk.iter_blocks().collect();
        assert_eq!(
            found,
            vec![
                (Point3::new(0, 0, 1), BlockType::BEDROCK),
                (Point3::new(2, 1, 0), BlockType::STONE),
                (Point3::new(15, 31, 15), BlockType::GRASS),
            ]
        );
    }

    #[test]
    fn positions_round_trip_through_index() {
        let mut chunk = Chunk::empty(Point3::new(0, 0, 0));
        chunk.set_block_at(7, 20, 3, BlockType::LOG);
        let (pos, _) = chunk.iter_blocks().next().unwrap();
        assert_eq!(
            Chunk::index_of(pos.x as i32, pos.y as i32, pos.z as i32),
            Chunk::index_of(7, 20, 3)
        );
    }
}
