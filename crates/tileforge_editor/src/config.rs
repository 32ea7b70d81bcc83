//! Persisted editor configuration

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tileforge_core::DEFAULT_BASE_TILE_SIZE;

const CONFIG_FILE: &str = "config.json";

/// Errors from configuration persistence
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    NoConfigDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// User-tunable editor settings, persisted under the platform's config
/// directory. Unknown or missing fields fall back to their defaults so old
/// config files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Where the tile atlas bitmap lives
    pub atlas_path: PathBuf,
    /// Reference tile edge in pixels at the base zoom rung
    pub base_tile_size: u32,
    /// Commands held per frame before further submissions drop
    pub queue_capacity: usize,
    /// Path of the last map saved or loaded
    pub last_map_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            atlas_path: PathBuf::from("assets/map/tilemap16.png"),
            base_tile_size: DEFAULT_BASE_TILE_SIZE,
            queue_capacity: 256,
            last_map_path: None,
        }
    }
}

impl EditorConfig {
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tileforge", "tileforge")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Load the config, falling back to defaults when there is none yet or
    /// it cannot be read.
    pub fn load() -> Self {
        match Self::load_from_file() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Could not load editor config: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    fn load_from_file() -> Result<Self, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save the config, creating the config directory if needed
    pub fn save(&self) -> Result<(), ConfigError> {
        let dir = Self::config_dir().ok_or(ConfigError::NoConfigDir)?;
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::IoError(e.to_string()))?;

        let path = dir.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;
        log::info!("Saved editor config to {:?}", path);
        Ok(())
    }
}
