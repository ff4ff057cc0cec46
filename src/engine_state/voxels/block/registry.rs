//! # Block Registry Module
//!
//! The registry is the single source of truth for how a block type looks: its display
//! name, the texture handles for its faces and whether it is transparent. Chunks only
//! store [`BlockType`] values and resolve everything else through here.
//!
//! Textures are loaded through a [`TextureLoader`] at registration time, so the registry
//! only ever holds handles, never image data.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use log::debug;

use crate::engine_state::rendering::{TextureHandle, TextureLoader};

use super::{block_side::BlockSide, block_type::BlockType};

/// Display name returned for block types without a registry entry.
pub const UNKNOWN_BLOCK_NAME: &str = "UNKNOWN";

/// The default catalog: type, name, side texture, top texture, transparent.
const DEFAULT_BLOCKS: [(BlockType, &str, &str, &str, bool); 8] = [
    (BlockType::LOG, "Oak Log", "textures/oak.png", "textures/oakend.png", false),
    (BlockType::BONE, "Bone Block", "textures/bone.png", "textures/boneend.png", false),
    (BlockType::GRATE, "Grate", "textures/grate.png", "textures/grate.png", false),
    (BlockType::BEDROCK, "Bedrock", "textures/bedrock.png", "textures/bedrock.png", false),
    (BlockType::STONE, "Stone", "textures/stone.png", "textures/stone.png", false),
    (BlockType::DIRT, "Dirt", "textures/dirt.png", "textures/dirt.png", false),
    (BlockType::GRASS, "Grass", "textures/grass.png", "textures/grasstop.png", false),
    (BlockType::LEAVES, "Oak Leaves", "textures/oakleaves.png", "textures/oakleaves.png", true),
];

/// A registry entry describing how a block type is displayed.
///
/// The four lateral faces share `side_texture`; the top and bottom faces share
/// `top_texture`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDef {
    /// Human readable name, e.g. for a hotbar or debug overlay.
    pub name: String,
    /// Texture used by the FRONT, BACK, LEFT and RIGHT faces.
    pub side_texture: TextureHandle,
    /// Texture used by the TOP and BOTTOM faces.
    pub top_texture: TextureHandle,
    /// Transparent blocks draw all six faces regardless of their neighbors.
    pub transparent: bool,
}

impl BlockDef {
    /// Returns the texture handle for the given face.
    pub fn texture_for(&self, side: BlockSide) -> TextureHandle {
        if side.is_cap() {
            self.top_texture
        } else {
            self.side_texture
        }
    }
}

/// Maps block types to their [`BlockDef`].
#[derive(Debug, Default)]
pub struct BlockRegistry {
    definitions: HashMap<BlockType, BlockDef>,
    /// Directory that relative texture paths are resolved against.
    texture_root: PathBuf,
}

impl BlockRegistry {
    /// Creates an empty registry resolving texture paths relative to `texture_root`.
    pub fn new(texture_root: impl Into<PathBuf>) -> Self {
        BlockRegistry {
            definitions: HashMap::new(),
            texture_root: texture_root.into(),
        }
    }

    /// Inserts or overwrites the entry for `block_type`.
    ///
    /// Both textures are loaded through `loader` immediately and only the returned
    /// handles are stored.
    pub fn register<L: TextureLoader + ?Sized>(
        &mut self,
        loader: &mut L,
        block_type: BlockType,
        name: &str,
        side_texture_path: impl AsRef<Path>,
        top_texture_path: impl AsRef<Path>,
        transparent: bool,
    ) {
        let side_texture = loader.load_texture(&self.texture_root.join(side_texture_path));
        let top_texture = loader.load_texture(&self.texture_root.join(top_texture_path));

        let previous = self.definitions.insert(
            block_type,
            BlockDef {
                name: name.to_string(),
                side_texture,
                top_texture,
                transparent,
            },
        );
        if previous.is_some() {
            debug!("Replaced registry entry for {:?}", block_type);
        }
    }

    /// Registers the fixed catalog of known block types.
    pub fn initialize_defaults<L: TextureLoader + ?Sized>(&mut self, loader: &mut L) {
        for (block_type, name, side, top, transparent) in DEFAULT_BLOCKS {
            self.register(loader, block_type, name, side, top, transparent);
        }
        debug!("Registered {} default block types", DEFAULT_BLOCKS.len());
    }

    /// Returns the entry for `block_type`, or `None` if it was never registered.
    pub fn lookup(&self, block_type: BlockType) -> Option<&BlockDef> {
        self.definitions.get(&block_type)
    }

    /// Returns the display name, falling back to [`UNKNOWN_BLOCK_NAME`].
    pub fn display_name(&self, block_type: BlockType) -> &str {
        self.lookup(block_type)
            .map(|def| def.name.as_str())
            .unwrap_or(UNKNOWN_BLOCK_NAME)
    }

    /// Resolves the texture handle for one face of a block type.
    pub fn texture_for(&self, block_type: BlockType, side: BlockSide) -> Option<TextureHandle> {
        self.lookup(block_type).map(|def| def.texture_for(side))
    }

    /// Unregistered types are treated as opaque.
    pub fn is_transparent(&self, block_type: BlockType) -> bool {
        self.lookup(block_type).is_some_and(|def| def.transparent)
    }

    /// Number of registered block types.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
