#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! A chunked voxel world engine: procedural terrain from seeded Perlin noise, runtime
//! block edits, face culling with per-corner ambient occlusion, and a compact binary
//! save format.
//!
//! The crate does not own a window or a GPU. Drawing and texture loading are delegated
//! to a collaborator implementing [`QuadRenderer`] and [`TextureLoader`]; the engine
//! decides which faces to draw and how to shade them.
//!
//! ## Key Modules
//!
//! * `config` - JSON startup settings
//! * `engine_state` - The engine facade, voxel data and the rendering front end
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     voxel_world::run();
//! }
//! ```
//!
//! Embedding the engine directly:
//!
//! ```
//! use voxel_world::{EngineConfig, EngineState, RecordingRenderer};
//!
//! let config = EngineConfig {
//!     grid_size: 2,
//!     load_existing: false,
//!     ..EngineConfig::default()
//! };
//! let mut renderer = RecordingRenderer::default();
//! let mut engine = EngineState::new(config, &mut renderer);
//! let stats = engine.render(&mut renderer);
//! assert_eq!(stats.chunks, 4);
//! ```

use std::path::Path;

use log::{error, info};

pub mod config;
pub mod engine_state;

pub use config::{ConfigError, EngineConfig};
pub use engine_state::{
    rendering::{
        QuadDraw, QuadRenderer, QuadVertex, RecordingRenderer, RenderStats, TextureHandle,
        TextureLoader, WorldRenderer,
    },
    voxels::{
        block::{
            block_side::BlockSide,
            block_type::BlockType,
            registry::{BlockDef, BlockRegistry},
        },
        chunk::{Chunk, ChunkKey, CHUNK_HEIGHT, CHUNK_LENGTH, CHUNK_VOLUME, CHUNK_WIDTH},
        perlin::PerlinNoise,
        persistence::{load_world, read_world, save_world, write_world, PersistenceError},
        raycast::{raycast, RaycastHit},
        terrain::TerrainGenerator,
        world::World,
    },
    EngineState,
};

/// Runs the headless engine.
///
/// Loads the configuration named by the first command line argument (defaults if absent
/// or unreadable), builds the world, renders a single frame into a [`RecordingRenderer`]
/// and saves the world back to the configured path.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load_from_path(Path::new(&path)),
        None => EngineConfig::default(),
    };
    info!(
        "Starting with seed {} and a {}x{} chunk grid",
        config.seed, config.grid_size, config.grid_size
    );

    let mut renderer = RecordingRenderer::default();
    let mut engine = EngineState::new(config, &mut renderer);
    info!(
        "World ready with {} chunks, {} textures loaded",
        engine.world().len(),
        renderer.textures.len()
    );

    let stats = engine.render(&mut renderer);
    info!(
        "Frame drawn: {} chunks, {} of {} blocks visible, {} quads",
        stats.chunks, stats.blocks_drawn, stats.blocks_considered, stats.quads
    );

    if engine.save().is_err() {
        error!("World was not saved");
    }
}
