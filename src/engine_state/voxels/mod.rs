//! # Voxel Engine Core
//!
//! This module contains the core voxel engine functionality, providing the foundation
//! for representing, generating, editing and persisting a voxel-based world.
//!
//! ## Architecture
//!
//! The voxel system is organized into several key components:
//!
//! * **Block**: Block type identifiers, block faces and the appearance registry
//! * **Chunk**: Fixed-size dense 3D arrays of blocks
//! * **World**: Coordinates chunks and maps world positions to chunk-local ones
//! * **Perlin / Terrain**: Seeded noise and the heightmap generator built on it
//! * **Persistence**: Binary world files
//! * **Raycast**: Block picking for runtime edits
//!
//! ## Data Flow
//!
//! 1. The terrain generator samples noise to fill chunks at startup (or a file is loaded)
//! 2. The world receives block reads and writes and delegates to the owning chunk
//! 3. The renderer reads the world to decide which faces to draw

pub mod block;
pub mod chunk;
pub mod perlin;
pub mod persistence;
pub mod raycast;
pub mod terrain;
pub mod world;
