//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! It provides functionality for block type identification and conversion from
//! the compact on-disk representation.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// Each variant represents a distinct material. The discriminant is the value stored
/// in chunk arrays and world files, so the order of variants is part of the file format.
/// The `FromPrimitive` derive allows checked conversion from raw bytes during loading.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive, bytemuck::NoUninit)]
pub enum BlockType {
    /// Empty space. Never rendered and never occludes a neighbor.
    #[default]
    AIR = 0,

    /// An oak log with bark on the sides and rings on the ends.
    LOG = 1,

    /// A bone block.
    BONE = 2,

    /// A metal grate.
    GRATE = 3,

    /// The indestructible floor layer of every terrain column.
    BEDROCK = 4,

    /// Plain stone, the bulk of every generated column.
    STONE = 5,

    /// Dirt, found directly below the grass layer.
    DIRT = 6,

    /// A grass block with a distinct top texture.
    GRASS = 7,

    /// Oak leaves. Registered as transparent so all faces are always drawn.
    LEAVES = 8,
}

impl BlockType {
    /// Every block type in discriminant order.
    pub const ALL: [BlockType; 9] = [
        BlockType::AIR,
        BlockType::LOG,
        BlockType::BONE,
        BlockType::GRATE,
        BlockType::BEDROCK,
        BlockType::STONE,
        BlockType::DIRT,
        BlockType::GRASS,
        BlockType::LEAVES,
    ];

    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// This is used when deserializing block data from the compact storage format.
    ///
    /// # Returns
    /// `None` if the value does not correspond to a known block type.
    pub fn from_int(btype: BlockTypeSize) -> Option<Self> {
        FromPrimitive::from_u8(btype)
    }

    /// Returns the compact integer representation of this block type.
    pub fn as_int(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Returns `true` for every type except `AIR`.
    pub fn is_solid(self) -> bool {
        self != BlockType::AIR
    }
}
