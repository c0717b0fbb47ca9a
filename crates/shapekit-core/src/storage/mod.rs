//! Storage abstraction for saved drawings.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::shapes::Shape;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Drawing not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A named, persisted set of shapes.
///
/// Shapes are stored as-is and not validated on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingRecord {
    pub id: String,
    pub name: String,
    pub shapes: Vec<Shape>,
    /// Creation time, milliseconds since the UNIX epoch.
    pub created: u64,
    /// Last save time, milliseconds since the UNIX epoch.
    pub last_modified: u64,
}

impl DrawingRecord {
    /// Create a record with a fresh id.
    pub fn new(name: impl Into<String>, shapes: Vec<Shape>) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            shapes,
            created: now,
            last_modified: now,
        }
    }

    /// Replace the shapes and bump the modification time.
    pub fn overwrite(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        self.last_modified = now_millis().max(self.created);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Oldest first; ties broken by id so listings are stable.
pub(crate) fn sort_records(records: &mut [DrawingRecord]) {
    records.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
}

/// Trait for drawing storage backends.
pub trait Storage: Send + Sync {
    /// Save shapes under `name`, overwriting the record with that name if
    /// one exists and creating a new record otherwise.
    fn save(&self, name: &str, shapes: &[Shape]) -> BoxFuture<'_, StorageResult<DrawingRecord>>;

    /// Load a record by id.
    fn get(&self, id: &str) -> BoxFuture<'_, StorageResult<DrawingRecord>>;

    /// List all records, oldest first.
    fn list_all(&self) -> BoxFuture<'_, StorageResult<Vec<DrawingRecord>>>;

    /// Delete a record. Returns whether it existed.
    fn delete_by_id(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
