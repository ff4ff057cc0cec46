//! World renderer.
//!
//! Walks every loaded chunk, builds a quad for each visible face of each solid block and
//! submits the quads to a [`QuadRenderer`]. Built quads are cached per chunk and reused
//! until an edit invalidates them.
//!
//! # Invalidation
//!
//! A face's visibility depends on the six direct neighbors of its block and its ambient
//! occlusion depends on the cells one step out along the normal, including diagonals. An
//! edit at `p` can therefore change the output of any block within one cell of `p` on every
//! axis, so [`WorldRenderer::invalidate_block`] marks every chunk overlapping that
//! neighborhood. Chunks are only split in X and Z, which caps this at four chunks.

use std::collections::{HashMap, HashSet};

use cgmath::{Point3, Vector3};
use log::debug;

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, registry::BlockRegistry},
    chunk::{Chunk, ChunkKey},
    world::World,
};

use super::{
    face::{face_corners, Face},
    occlusion::face_brightness,
    visibility::visible_sides,
    QuadDraw, QuadRenderer, QuadVertex, TextureHandle,
};

/// Draw statistics for a single frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    /// Loaded chunks walked this frame
    pub chunks: usize,
    /// Solid blocks inspected for visible faces
    pub blocks_considered: usize,
    /// Blocks with at least one visible face
    pub blocks_drawn: usize,
    /// Quads submitted to the renderer
    pub quads: usize,
}

/// Quads built for one chunk, along with the counts that produced them.
#[derive(Debug, Default, Clone)]
struct ChunkQuads {
    quads: Vec<QuadDraw>,
    blocks_considered: usize,
    blocks_drawn: usize,
}

/// Renders a [`World`] through a [`QuadRenderer`] with per-chunk caching.
#[derive(Debug, Default)]
pub struct WorldRenderer {
    cache: HashMap<ChunkKey, ChunkQuads>,
    dirty: HashSet<ChunkKey>,
}

impl WorldRenderer {
    /// Creates a renderer with an empty cache.
    pub fn new() -> Self {
        WorldRenderer {
            cache: HashMap::new(),
            dirty: HashSet::new(),
        }
    }

    /// Draws every visible face in the world.
    ///
    /// Chunks whose `loaded` flag is unset are skipped. Cached quads are reused unless the
    /// chunk was invalidated since it was last built.
    pub fn render<R: QuadRenderer + ?Sized>(
        &mut self,
        world: &World,
        registry: &BlockRegistry,
        renderer: &mut R,
    ) -> RenderStats {
        let mut stats = RenderStats::default();
        let mut rebuilt = 0;

        for chunk in world.chunks().iter().filter(|chunk| chunk.loaded) {
            let key = chunk.key();
            if self.dirty.remove(&key) || !self.cache.contains_key(&key) {
                self.cache.insert(key, build_chunk_quads(world, registry, chunk));
                rebuilt += 1;
            }

            let Some(entry) = self.cache.get(&key) else {
                continue;
            };
            for quad in &entry.quads {
                renderer.draw_quad(quad);
            }

            stats.chunks += 1;
            stats.blocks_considered += entry.blocks_considered;
            stats.blocks_drawn += entry.blocks_drawn;
            stats.quads += entry.quads.len();
        }

        debug!(
            "Rendered {} chunks ({} rebuilt): {} blocks considered, {} drawn, {} quads",
            stats.chunks, rebuilt, stats.blocks_considered, stats.blocks_drawn, stats.quads
        );

        stats
    }

    /// Marks every chunk whose output may change after an edit at `position`.
    pub fn invalidate_block(&mut self, position: Point3<i32>) {
        for dx in -1..=1 {
            for dz in -1..=1 {
                let key = ChunkKey::containing(position + Vector3::new(dx, 0, dz));
                if self.cache.contains_key(&key) {
                    self.dirty.insert(key);
                }
            }
        }
    }

    /// Drops all cached quads, forcing a full rebuild on the next frame.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
        self.dirty.clear();
    }

    /// Number of chunks with cached quads.
    pub fn cached_chunks(&self) -> usize {
        self.cache.len()
    }
}

/// Builds the quads for every visible face of every solid block in `chunk`.
fn build_chunk_quads(world: &World, registry: &BlockRegistry, chunk: &Chunk) -> ChunkQuads {
    let mut built = ChunkQuads::default();

    for (local, block_type) in chunk.iter_blocks() {
        built.blocks_considered += 1;
        let position = chunk.to_world(local);
        let visibility = visible_sides(world, registry, position);

        let mut drawn = false;
        for side in BlockSide::all() {
            if !visibility[side as usize] {
                continue;
            }
            let Some(texture) = registry.texture_for(block_type, side) else {
                continue;
            };
            built.quads.push(build_quad(world, Face::new(position, side), texture));
            drawn = true;
        }

        if drawn {
            built.blocks_drawn += 1;
        }
    }

    built
}

fn build_quad(world: &World, face: Face, texture: TextureHandle) -> QuadDraw {
    let positions = face.corner_positions();
    let brightness = face_brightness(world, &face);
    let corners = face_corners(face.side);
    let normal = face.side.normal();

    QuadDraw {
        texture,
        normal: Vector3::new(normal.x as f32, normal.y as f32, normal.z as f32),
        vertices: std::array::from_fn(|i| {
            QuadVertex::new(positions[i], corners[i].tex_coords, brightness[i])
        }),
    }
}
