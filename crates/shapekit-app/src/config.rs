//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use shapekit_core::config::EngineConfig;
use shapekit_core::storage::FileStorage;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration, loaded from an optional JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// Start with dimension labels on.
    pub show_annotations: bool,
    /// Where drawings are stored. Defaults to the platform data directory.
    pub storage_dir: Option<PathBuf>,
    /// Exported frame size.
    pub width: f64,
    pub height: f64,
    /// Exported frame background. Defaults to white.
    pub background: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            show_annotations: false,
            storage_dir: None,
            width: 800.0,
            height: 600.0,
            background: None,
        }
    }
}

impl AppConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let config = serde_json::from_str(&json).map_err(|e| AppError::json(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Open the configured drawing store.
    pub fn open_storage(&self) -> AppResult<FileStorage> {
        let storage = match &self.storage_dir {
            Some(dir) => FileStorage::new(dir.clone())?,
            None => FileStorage::default_location()?,
        };
        log::debug!("Using drawings in {}", storage.base_path().display());
        Ok(storage)
    }
}
