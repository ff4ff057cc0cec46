//! # Engine State Module
//!
//! The core engine module that owns the world and everything needed to edit, draw and
//! persist it.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container for the engine
//! * `rendering` - Face visibility, ambient occlusion and the per-chunk quad cache
//! * `voxels` - Handles voxel data, chunks, world generation and persistence
//!
//! ## Architecture
//!
//! `EngineState` is the single owner of the [`World`]. Edits go through it so the quad
//! cache can be invalidated alongside the block write; reads may borrow the world
//! directly through [`EngineState::world`]. Everything runs on the caller's thread, one
//! frame at a time.

use std::path::Path;

use cgmath::{Point3, Vector3};
use log::{error, info, warn};

use rendering::{QuadRenderer, RenderStats, TextureLoader, WorldRenderer};
use voxels::{
    block::{block_type::BlockType, registry::BlockRegistry},
    perlin::PerlinNoise,
    persistence::{load_world, save_world, PersistenceError},
    raycast::{raycast, MAX_REACH},
    terrain::TerrainGenerator,
    world::World,
};

use crate::config::EngineConfig;

pub mod rendering;
pub mod voxels;

/// The main state container for the voxel engine
///
/// Holds the configuration, the world, the block registry and the renderer's quad cache,
/// and keeps the cache consistent with edits made through it.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::{BlockType, EngineConfig, EngineState, RecordingRenderer};
///
/// let config = EngineConfig {
///     grid_size: 1,
///     load_existing: false,
///     ..EngineConfig::default()
/// };
/// let mut renderer = RecordingRenderer::default();
/// let mut engine = EngineState::new(config, &mut renderer);
///
/// engine.set_block_at(Point3::new(3, 30, 3), BlockType::LOG);
/// assert_eq!(engine.block_name_at(Point3::new(3, 30, 3)), "Oak Log");
///
/// let stats = engine.render(&mut renderer);
/// assert_eq!(stats.chunks, 1);
/// ```
pub struct EngineState {
    /// Settings the engine was started with
    pub config: EngineConfig,
    /// The voxel world containing all chunk data
    world: World,
    /// Block appearance lookup
    registry: BlockRegistry,
    /// Per-chunk quad cache
    world_renderer: WorldRenderer,
}

impl EngineState {
    /// Creates a new engine state with all subsystems initialized
    ///
    /// Registers the default block catalog (loading its textures through `loader`), then
    /// loads the world from `config.world_path` when `config.load_existing` is set and the
    /// file exists. Otherwise, or if loading fails, terrain is generated from
    /// `config.seed`.
    ///
    /// # Arguments
    ///
    /// * `config` - Startup settings
    /// * `loader` - The rendering collaborator that owns textures
    pub fn new<L: TextureLoader + ?Sized>(config: EngineConfig, loader: &mut L) -> Self {
        let mut registry = BlockRegistry::new(config.texture_root());
        registry.initialize_defaults(loader);

        let world = Self::initial_world(&config);

        EngineState {
            config,
            world,
            registry,
            world_renderer: WorldRenderer::new(),
        }
    }

    fn initial_world(config: &EngineConfig) -> World {
        let path = config.world_path();
        if config.load_existing && path.exists() {
            match load_world(path) {
                Ok(world) => return world,
                Err(err) => warn!("Could not load {}: {err}. Generating terrain", path.display()),
            }
        }

        let mut world = World::new();
        world.init_world(
            config.grid_size,
            &TerrainGenerator::new(PerlinNoise::new(config.seed)),
        );
        world
    }

    /// The world, for read-only queries.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The block registry.
    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Returns the block at a world position. Air outside the world.
    pub fn get_block_at(&self, position: Point3<i32>) -> BlockType {
        self.world.get_block_at(position)
    }

    /// Overwrites a block and invalidates the cached quads it may affect.
    ///
    /// # Returns
    /// `true` if a cell was written.
    pub fn set_block_at(&mut self, position: Point3<i32>, block_type: BlockType) -> bool {
        let written = self.world.set_block_at(position, block_type);
        if written {
            self.world_renderer.invalidate_block(position);
        }
        written
    }

    /// Display name of the block at a position, `"UNKNOWN"` for unregistered types.
    pub fn block_name_at(&self, position: Point3<i32>) -> &str {
        self.registry.display_name(self.get_block_at(position))
    }

    /// Draws one frame through `renderer`.
    pub fn render<R: QuadRenderer + ?Sized>(&mut self, renderer: &mut R) -> RenderStats {
        self.world_renderer.render(&self.world, &self.registry, renderer)
    }

    /// Saves the world to the configured path.
    pub fn save(&self) -> Result<(), PersistenceError> {
        self.save_to(self.config.world_path())
    }

    /// Saves the world to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), PersistenceError> {
        save_world(&self.world, path).inspect_err(|err| {
            error!("Failed to save world to {}: {err}", path.display());
        })
    }

    /// Replaces the world with the contents of the configured path.
    pub fn load(&mut self) -> Result<(), PersistenceError> {
        let path = self.config.world_path().to_path_buf();
        self.load_from(&path)
    }

    /// Replaces the world with the contents of `path`.
    ///
    /// The current world is left untouched if the file cannot be read or fails
    /// validation.
    pub fn load_from(&mut self, path: &Path) -> Result<(), PersistenceError> {
        let world = load_world(path).inspect_err(|err| {
            error!("Failed to load world from {}: {err}", path.display());
        })?;
        self.world = world;
        self.world_renderer.invalidate_all();
        Ok(())
    }

    /// Clears the first solid block along a ray.
    ///
    /// # Returns
    /// The position of the removed block, or `None` if nothing was in reach.
    pub fn break_block(
        &mut self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
    ) -> Option<Point3<i32>> {
        let hit = raycast(&self.world, origin, direction, MAX_REACH)?;
        self.set_block_at(hit.block, BlockType::AIR);
        info!("Broke block at {:?}", hit.block);
        Some(hit.block)
    }

    /// Places `block_type` against the face of the first solid block along a ray.
    ///
    /// Nothing is placed when the ray starts inside a block, the target cell lies outside
    /// the world, or `block_type` is air.
    ///
    /// # Returns
    /// The position of the placed block.
    pub fn place_block(
        &mut self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        block_type: BlockType,
    ) -> Option<Point3<i32>> {
        if !block_type.is_solid() {
            return None;
        }
        let hit = raycast(&self.world, origin, direction, MAX_REACH)?;
        if hit.normal == Vector3::new(0, 0, 0) {
            return None;
        }

        let target = hit.adjacent();
        if !self.set_block_at(target, block_type) {
            return None;
        }
        info!("Placed {:?} at {:?}", block_type, target);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::{rendering::RecordingRenderer, voxels::chunk::Chunk};

    fn flat_engine() -> (EngineState, RecordingRenderer) {
        let mut renderer = RecordingRenderer::default();
        let config = EngineConfig {
            grid_size: 0,
            load_existing: false,
            ..EngineConfig::default()
        };
        let mut engine = EngineState::new(config, &mut renderer);
        engine.world.add_chunk(Chunk::empty(Point3::new(0, 0, 0)));
        for x in 0..16 {
            for z in 0..16 {
                engine.set_block_at(Point3::new(x, 0, z), BlockType::STONE);
            }
        }
        (engine, renderer)
    }

    #[test]
    fn registry_is_populated_on_startup() {
        let (engine, renderer) = flat_engine();
        assert_eq!(engine.registry().len(), 8);
        assert_eq!(renderer.textures.len(), 16);
        assert_eq!(engine.block_name_at(Point3::new(0, 5, 0)), "UNKNOWN");
        assert_eq!(engine.block_name_at(Point3::new(0, 0, 0)), "Stone");
    }

    #[test]
    fn edits_show_up_in_the_next_frame() {
        let (mut engine, mut renderer) = flat_engine();
        let before = engine.render(&mut renderer);
        assert_eq!(before.quads, 16 * 16 * 2 + 16 * 4);

        engine.set_block_at(Point3::new(8, 1, 8), BlockType::DIRT);
        renderer.clear_quads();
        let after = engine.render(&mut renderer);
        // One new cube shows five faces and hides one top face below it
        assert_eq!(after.quads, before.quads + 5 - 1);
        assert_eq!(renderer.quads.len(), after.quads);
    }

    #[test]
    fn break_and_place_follow_the_ray() {
        let (mut engine, _) = flat_engine();
        let origin = Point3::new(4.5, 5.5, 4.5);
        let down = Vector3::new(0.0, -1.0, 0.0);

        assert_eq!(
            engine.place_block(origin, down, BlockType::GRATE),
            Some(Point3::new(4, 1, 4))
        );
        assert_eq!(engine.get_block_at(Point3::new(4, 1, 4)), BlockType::GRATE);

        assert_eq!(engine.break_block(origin, down), Some(Point3::new(4, 1, 4)));
        assert_eq!(engine.get_block_at(Point3::new(4, 1, 4)), BlockType::AIR);

        assert_eq!(engine.place_block(origin, down, BlockType::AIR), None);
        let up = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(engine.break_block(origin, up), None);
    }

    #[test]
    fn edits_ignore_rays_from_invalid_origins() {
        let (mut engine, _) = flat_engine();
        let down = Vector3::new(0.0, -1.0, 0.0);
        for origin in [
            Point3::new(f32::NAN, 5.5, 4.5),
            Point3::new(1e30, 5.5, 4.5),
            Point3::new(4.5, f32::INFINITY, 4.5),
        ] {
            assert_eq!(engine.break_block(origin, down), None);
            assert_eq!(engine.place_block(origin, down, BlockType::DIRT), None);
        }
        assert_eq!(engine.get_block_at(Point3::new(4, 0, 4)), BlockType::STONE);
    }

    #[test]
    fn failed_load_keeps_the_current_world() {
        let (mut engine, _) = flat_engine();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.dat");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        assert!(engine.load_from(&path).is_err());
        assert_eq!(engine.world().len(), 1);
        assert_eq!(engine.get_block_at(Point3::new(3, 0, 3)), BlockType::STONE);
    }
}
