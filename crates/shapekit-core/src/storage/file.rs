//! File-based storage implementation.

use super::{BoxFuture, DrawingRecord, Storage, StorageError, StorageResult, sort_records};
use crate::shapes::Shape;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based storage.
///
/// Stores one JSON file per drawing record in a directory, named by record id.
pub struct FileStorage {
    /// Base directory for record storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Directory used when no storage dir is configured.
    ///
    /// On Unix: `~/.local/share/shapekit/drawings/`
    /// On Windows: `%LOCALAPPDATA%\shapekit\drawings\`
    pub fn default_path() -> StorageResult<PathBuf> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
        Ok(base.join("shapekit").join("drawings"))
    }

    /// Create file storage in the default location.
    pub fn default_location() -> StorageResult<Self> {
        Self::new(Self::default_path()?)
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a record id.
    fn record_path(&self, id: &str) -> PathBuf {
        // Sanitize id to be safe for filenames
        let safe_id: String = id
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe_id))
    }

    fn read_record(path: &Path) -> StorageResult<DrawingRecord> {
        let json = fs::read_to_string(path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        DrawingRecord::from_json(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn write_record(&self, record: &DrawingRecord) -> StorageResult<()> {
        let path = self.record_path(&record.id);
        let json = record
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Read every record in the directory, skipping files that fail to parse.
    fn read_all(&self) -> StorageResult<Vec<DrawingRecord>> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("Failed to read directory: {}", e)))?;

        let mut records = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            // Only include .json files
            if path.extension().is_none_or(|e| e != "json") {
                continue;
            }
            match Self::read_record(&path) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("Skipping unreadable drawing: {}", e),
            }
        }
        sort_records(&mut records);
        Ok(records)
    }
}

impl Storage for FileStorage {
    fn save(&self, name: &str, shapes: &[Shape]) -> BoxFuture<'_, StorageResult<DrawingRecord>> {
        let name = name.to_string();
        let shapes = shapes.to_vec();

        Box::pin(async move {
            let existing = self.read_all()?.into_iter().find(|r| r.name == name);
            let record = match existing {
                Some(mut record) => {
                    record.overwrite(shapes);
                    record
                }
                None => DrawingRecord::new(name, shapes),
            };
            self.write_record(&record)?;
            log::info!("Saved drawing {} ({}) to {}", record.name, record.id, self.base_path.display());
            Ok(record)
        })
    }

    fn get(&self, id: &str) -> BoxFuture<'_, StorageResult<DrawingRecord>> {
        let path = self.record_path(id);
        let id_owned = id.to_string();

        Box::pin(async move {
            if !path.exists() {
                return Err(StorageError::NotFound(id_owned));
            }
            Self::read_record(&path)
        })
    }

    fn list_all(&self) -> BoxFuture<'_, StorageResult<Vec<DrawingRecord>>> {
        Box::pin(async move { self.read_all() })
    }

    fn delete_by_id(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let path = self.record_path(id);

        Box::pin(async move {
            if !path.exists() {
                return Ok(false);
            }
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("Failed to delete {}: {}", path.display(), e))
            })?;
            log::info!("Deleted {}", path.display());
            Ok(true)
        })
    }
}
