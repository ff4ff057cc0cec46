//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel engine.
//! It includes block type definitions, block face handling, and the registry that
//! maps block types to their appearance.

pub mod block_side;
pub mod block_type;
pub mod registry;

/// The underlying integer type used to represent block types in memory and on disk.
pub type BlockTypeSize = u8;
