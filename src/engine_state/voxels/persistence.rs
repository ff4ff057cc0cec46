//! # World Persistence Module
//!
//! Binary save/load of a [`World`].
//!
//! ## File Format
//!
//! All values are little-endian. There is no header or version field.
//!
//! ```text
//! i32                       chunk count
//! repeated chunk count times:
//!   f32 f32 f32             chunk origin x, y, z
//!   u8[W * H * L]           block types, X-major, then Y, Z fastest
//! ```
//!
//! ## Validation
//!
//! Loading fails closed. A file is rejected if it ends early, declares a negative chunk
//! count, contains an unknown block type, a misaligned or duplicate origin, or has bytes
//! left over after the last chunk. The caller's world is only replaced once the whole
//! file has been read successfully.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use cgmath::Point3;
use log::{debug, info};
use thiserror::Error;

use super::{
    block::block_type::BlockType,
    chunk::{Chunk, ChunkKey, CHUNK_VOLUME},
    world::World,
};

/// Errors produced while saving or loading a world file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The world file could not be opened or created.
    #[error("failed to open world file {path}: {source}")]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Reading or writing failed part way through.
    #[error("world file i/o error: {0}")]
    Io(#[from] io::Error),

    /// The file ended before all declared chunk data was read.
    #[error("world file is truncated")]
    Truncated,

    /// The declared chunk count is negative.
    #[error("world file declares a negative chunk count ({0})")]
    NegativeChunkCount(i32),

    /// A block byte does not name a known block type.
    #[error("chunk {chunk} holds unknown block type {value} at offset {offset}")]
    InvalidBlockType {
        /// Index of the chunk in the file
        chunk: usize,
        /// Byte offset inside the chunk's block array
        offset: usize,
        /// The offending value
        value: u8,
    },

    /// A chunk origin is not on the chunk grid.
    #[error("chunk {chunk} has misaligned origin ({x}, {y}, {z})")]
    MisalignedOrigin {
        /// Index of the chunk in the file
        chunk: usize,
        /// Stored origin X
        x: f32,
        /// Stored origin Y
        y: f32,
        /// Stored origin Z
        z: f32,
    },

    /// Two chunks share the same origin.
    #[error("duplicate chunk at origin ({x}, {z})")]
    DuplicateChunk {
        /// Origin X
        x: i32,
        /// Origin Z
        z: i32,
    },

    /// Data remains after the last declared chunk.
    #[error("world file has trailing data after {0} chunks")]
    TrailingData(usize),
}

/// Writes `world` to `path`, replacing any existing file.
pub fn save_world(world: &World, path: &Path) -> Result<(), PersistenceError> {
    let file = File::create(path).map_err(|source| PersistenceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_world(world, &mut writer)?;
    writer.flush()?;

    info!("Saved {} chunks to {}", world.len(), path.display());
    Ok(())
}

/// Reads a world from `path`.
pub fn load_world(path: &Path) -> Result<World, PersistenceError> {
    let file = File::open(path).map_err(|source| PersistenceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let world = read_world(&mut BufReader::new(file))?;

    info!("Loaded {} chunks from {}", world.len(), path.display());
    Ok(world)
}

/// Serializes `world` into `writer`.
pub fn write_world<W: Write>(world: &World, writer: &mut W) -> Result<(), PersistenceError> {
    writer.write_all(&(world.len() as i32).to_le_bytes())?;

    for chunk in world.chunks() {
        let origin = chunk.position;
        for coordinate in [origin.x, origin.y, origin.z] {
            writer.write_all(&(coordinate as f32).to_le_bytes())?;
        }
        writer.write_all(bytemuck::cast_slice::<BlockType, u8>(chunk.blocks()))?;
    }

    Ok(())
}

/// Deserializes a world from `reader`, consuming it to the end.
pub fn read_world<R: Read>(reader: &mut R) -> Result<World, PersistenceError> {
    let count = read_i32(reader)?;
    if count < 0 {
        return Err(PersistenceError::NegativeChunkCount(count));
    }
    let count = count as usize;
    debug!("Reading {} chunks", count);

    let mut world = World::new();
    let mut raw_blocks = vec![0u8; CHUNK_VOLUME];

    for chunk_index in 0..count {
        let x = read_f32(reader)?;
        let y = read_f32(reader)?;
        let z = read_f32(reader)?;
        let origin = aligned_origin(chunk_index, x, y, z)?;

        read_exact(reader, &mut raw_blocks)?;
        let blocks = raw_blocks
            .iter()
            .enumerate()
            .map(|(offset, &value)| {
                BlockType::from_int(value).ok_or(PersistenceError::InvalidBlockType {
                    chunk: chunk_index,
                    offset,
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // from_blocks only fails on a length mismatch, which the fixed buffer rules out
        let chunk = Chunk::from_blocks(origin, blocks).ok_or(PersistenceError::Truncated)?;
        let key = chunk.key();
        if !world.add_chunk(chunk) {
            return Err(PersistenceError::DuplicateChunk { x: key.x, z: key.z });
        }
    }

    let mut probe = [0u8; 1];
    if reader.read(&mut probe)? != 0 {
        return Err(PersistenceError::TrailingData(count));
    }

    Ok(world)
}

/// Converts a stored origin to grid coordinates, rejecting anything off the chunk grid.
fn aligned_origin(chunk: usize, x: f32, y: f32, z: f32) -> Result<Point3<i32>, PersistenceError> {
    let misaligned = PersistenceError::MisalignedOrigin { chunk, x, y, z };

    let is_integral =
        |v: f32| v.is_finite() && v.fract() == 0.0 && v.abs() <= i32::MAX as f32 / 2.0;
    if !is_integral(x) || !is_integral(z) || y != 0.0 {
        return Err(misaligned);
    }

    let origin = Point3::new(x as i32, 0, z as i32);
    if !ChunkKey::is_origin(origin) {
        return Err(misaligned);
    }
    Ok(origin)
}

fn read_exact<R: Read>(reader: &mut R, buffer: &mut [u8]) -> Result<(), PersistenceError> {
    reader.read_exact(buffer).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => PersistenceError::Truncated,
        _ => PersistenceError::Io(e),
    })
}

fn read_i32<R: Read>(reader: &mut R) -> Result<i32, PersistenceError> {
    let mut bytes = [0u8; 4];
    read_exact(reader, &mut bytes)?;
    Ok(i32::from_le_bytes(bytes))
}

fn read_f32<R: Read>(reader: &mut R) -> Result<f32, PersistenceError> {
    let mut bytes = [0u8; 4];
    read_exact(reader, &mut bytes)?;
    Ok(f32::from_le_bytes(bytes))
}
