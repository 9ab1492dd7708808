//! In-memory storage backend.

use crate::{KeyValueStore, Result};
use parking_lot::RwLock;
use std::collections::HashMap;

/// An in-memory key/value store.
///
/// Backs the volatile (per-context) scope: contents are lost when the store
/// is dropped and are never shared across independent contexts. Also the
/// backend of choice for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.data.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get() {
        let store = MemoryStore::new();
        store.set("greeting", "hello").unwrap();

        assert_eq!(store.get("greeting").unwrap(), Some("hello".to_string()));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn memory_store_set_replaces() {
        let store = MemoryStore::new();
        store.set("key", "first").unwrap();
        store.set("key", "second").unwrap();

        assert_eq!(store.get("key").unwrap(), Some("second".to_string()));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn memory_store_remove() {
        let store = MemoryStore::new();
        store.set("key", "value").unwrap();
        store.remove("key").unwrap();

        assert_eq!(store.get("key").unwrap(), None);
        assert!(store.is_empty().unwrap());

        // Removing an absent key is a no-op
        store.remove("key").unwrap();
    }
}
