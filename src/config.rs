//! # Engine Configuration
//!
//! Startup settings read from a JSON file. Every field has a default, so a partial file
//! (or `{}`) is valid and a missing or broken file falls back to the defaults entirely.
//!
//! ```json
//! {
//!     "seed": 42,
//!     "grid_size": 8,
//!     "texture_root": "assets",
//!     "world_path": "saves/world.dat",
//!     "load_existing": true
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading an explicit configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The contents are not valid configuration JSON.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings controlling world generation, asset lookup and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the terrain noise.
    pub seed: u32,
    /// Chunks per side of the generated square.
    pub grid_size: u32,
    /// Directory block texture paths are resolved against.
    pub texture_root: String,
    /// Where the world is saved to and loaded from.
    pub world_path: String,
    /// Load `world_path` at startup if it exists instead of generating terrain.
    pub load_existing: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            grid_size: 4,
            texture_root: ".".to_string(),
            world_path: "world.dat".to_string(),
            load_existing: true,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Reads and parses a configuration file, reporting failures to the caller.
    pub fn try_load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}. Using defaults");
                Self::default()
            }
        }
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The world file as a path.
    pub fn world_path(&self) -> &Path {
        Path::new(&self.world_path)
    }

    /// The texture directory as a path.
    pub fn texture_root(&self) -> &Path {
        Path::new(&self.texture_root)
    }
}
