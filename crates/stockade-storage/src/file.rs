//! File-backed storage backend.

use crate::{KeyValueStore, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A file-backed key/value store.
///
/// Backs the durable scope: the full map is serialized as one JSON object and
/// rewritten wholesale on every mutation. Every context opened over the same
/// path sees the same data; concurrent writers race and the last write wins.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Opens (or creates) a store backed by the file at `path`.
    ///
    /// A missing backing file yields an empty store. A malformed one degrades
    /// to an empty store with a logged warning rather than an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "backing file is malformed, starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, data: &HashMap<String, String>) -> Result<()> {
        let json = serde_json::to_string(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self.data.write();
        data.insert(key.to_string(), value.to_string());
        self.persist(&data)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut data = self.data.write();
        if data.remove(key).is_some() {
            self.persist(&data)?;
        }
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.data.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_path(tmp: &TempDir) -> PathBuf {
        tmp.path().join("stockade.json")
    }

    #[test]
    fn file_store_round_trips_across_instances() {
        let tmp = TempDir::new().unwrap();
        let path = store_path(&tmp);

        let store = FileStore::open(&path).unwrap();
        store.set("users", "[]").unwrap();
        store.set("remember", "alice").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("users").unwrap(), Some("[]".to_string()));
        assert_eq!(reopened.get("remember").unwrap(), Some("alice".to_string()));
        assert_eq!(reopened.len().unwrap(), 2);
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(store_path(&tmp)).unwrap();

        assert!(store.is_empty().unwrap());
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn file_store_malformed_file_degrades_to_empty() {
        let tmp = TempDir::new().unwrap();
        let path = store_path(&tmp);
        fs::write(&path, "{not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.is_empty().unwrap());

        // The store stays usable after degradation
        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn file_store_remove_persists() {
        let tmp = TempDir::new().unwrap();
        let path = store_path(&tmp);

        let store = FileStore::open(&path).unwrap();
        store.set("key", "value").unwrap();
        store.remove("key").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("key").unwrap(), None);
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("deeper").join("store.json");

        let store = FileStore::open(&path).unwrap();
        store.set("key", "value").unwrap();

        assert!(path.exists());
    }
}
