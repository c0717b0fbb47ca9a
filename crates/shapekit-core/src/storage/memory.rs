//! In-memory storage implementation.

use super::{BoxFuture, DrawingRecord, Storage, StorageError, StorageResult, sort_records};
use crate::shapes::Shape;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<String, DrawingRecord>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl Storage for MemoryStorage {
    fn save(&self, name: &str, shapes: &[Shape]) -> BoxFuture<'_, StorageResult<DrawingRecord>> {
        let name = name.to_string();
        let shapes = shapes.to_vec();
        Box::pin(async move {
            let mut records = self.records.write().map_err(lock_error)?;
            if let Some(record) = records.values_mut().find(|r| r.name == name) {
                record.overwrite(shapes);
                log::debug!("Overwrote drawing {} ({})", record.name, record.id);
                return Ok(record.clone());
            }
            let record = DrawingRecord::new(name, shapes);
            records.insert(record.id.clone(), record.clone());
            log::debug!("Created drawing {} ({})", record.name, record.id);
            Ok(record)
        })
    }

    fn get(&self, id: &str) -> BoxFuture<'_, StorageResult<DrawingRecord>> {
        let id = id.to_string();
        Box::pin(async move {
            let records = self.records.read().map_err(lock_error)?;
            records.get(&id).cloned().ok_or(StorageError::NotFound(id))
        })
    }

    fn list_all(&self) -> BoxFuture<'_, StorageResult<Vec<DrawingRecord>>> {
        Box::pin(async move {
            let records = self.records.read().map_err(lock_error)?;
            let mut all: Vec<DrawingRecord> = records.values().cloned().collect();
            sort_records(&mut all);
            Ok(all)
        })
    }

    fn delete_by_id(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut records = self.records.write().map_err(lock_error)?;
            Ok(records.remove(&id).is_some())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Circle;
    use kurbo::Point;
    use pollster::block_on;

    fn circle(id: &str) -> Shape {
        Shape::Circle(Circle::new(id, Point::new(0.0, 0.0), 20.0, 20.0))
    }

    #[test]
    fn test_save_and_get() {
        let storage = MemoryStorage::new();

        let saved = block_on(storage.save("first", &[circle("a")])).unwrap();
        let loaded = block_on(storage.get(&saved.id)).unwrap();

        assert_eq!(loaded, saved);
        assert_eq!(loaded.shapes, vec![circle("a")]);
    }

    #[test]
    fn test_save_overwrites_by_name() {
        let storage = MemoryStorage::new();

        let first = block_on(storage.save("sketch", &[circle("a")])).unwrap();
        let second = block_on(storage.save("sketch", &[circle("a"), circle("b")])).unwrap();
        block_on(storage.save("other", &[])).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.shapes.len(), 2);
        assert_eq!(block_on(storage.list_all()).unwrap().len(), 2);
    }

    #[test]
    fn test_not_found() {
        let storage = MemoryStorage::new();
        let result = block_on(storage.get("nonexistent"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_delete_reports_existence() {
        let storage = MemoryStorage::new();
        let saved = block_on(storage.save("sketch", &[])).unwrap();

        assert!(block_on(storage.delete_by_id(&saved.id)).unwrap());
        assert!(!block_on(storage.delete_by_id(&saved.id)).unwrap());
        assert!(block_on(storage.list_all()).unwrap().is_empty());
    }
}
