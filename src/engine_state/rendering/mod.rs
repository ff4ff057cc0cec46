//! Rendering system for the voxel engine.
//!
//! The engine does not talk to a GPU itself. Instead it decides *what* to draw (which
//! faces are exposed, how dark each corner is, which texture applies) and hands finished
//! quads to a rendering collaborator implementing [`QuadRenderer`]. Textures are loaded
//! through the same collaborator via [`TextureLoader`].
//!
//! ## Key Components
//!
//! * `face` - Per-face corner, texture coordinate and AO sampling tables
//! * `visibility` - Decides which of a block's six faces are drawn
//! * `occlusion` - Computes the per-corner ambient occlusion brightness
//! * `renderer` - Walks the world, caches per-chunk quads and submits them

use std::path::{Path, PathBuf};

pub mod face;
pub mod occlusion;
pub mod renderer;
mod vertex;
pub mod visibility;

pub use renderer::{RenderStats, WorldRenderer};
pub use vertex::{QuadDraw, QuadVertex};

/// Opaque handle to a texture owned by the rendering collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Loads textures on behalf of the block registry.
pub trait TextureLoader {
    /// Loads the image at `path` and returns a handle to it.
    fn load_texture(&mut self, path: &Path) -> TextureHandle;
}

/// Draws textured, per-vertex shaded quads.
pub trait QuadRenderer {
    /// Draws a single quad.
    fn draw_quad(&mut self, quad: &QuadDraw);
}

/// A renderer that records everything it is asked to do.
///
/// Texture handles are assigned sequentially in load order. Used by the headless
/// binary and by tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Paths passed to `load_texture`, indexed by handle
    pub textures: Vec<PathBuf>,
    /// Quads drawn since the last `clear_quads`
    pub quads: Vec<QuadDraw>,
}

impl RecordingRenderer {
    /// Forgets all recorded quads but keeps loaded textures.
    pub fn clear_quads(&mut self) {
        self.quads.clear();
    }
}

impl TextureLoader for RecordingRenderer {
    fn load_texture(&mut self, path: &Path) -> TextureHandle {
        self.textures.push(path.to_path_buf());
        TextureHandle((self.textures.len() - 1) as u32)
    }
}

impl QuadRenderer for RecordingRenderer {
    fn draw_quad(&mut self, quad: &QuadDraw) {
        self.quads.push(*quad);
    }
}
