//! # Document Stores
//!
//! The persistence collaborator, reduced to whole-document upserts keyed by
//! name. Last write wins: no version token is compared on save.
//!
//! - **Memory**: for tests and scratch sessions
//! - **File**: one pretty-printed JSON file per key under a directory

use crate::errors::StoreError;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait DocumentStore {
    /// Replace whatever is stored under `key`
    fn save(&mut self, key: &str, value: &Value) -> Result<(), StoreError>;

    /// `Ok(None)` when nothing was ever saved under `key`
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn save(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        self.records.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.records.get(key).cloned())
    }
}

/// Directory-backed store: key `site` lives at `<root>/site.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path backing `key`. Keys are plain names; anything that could walk
    /// out of the root is refused.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        let file = if key.ends_with(".json") {
            key.to_string()
        } else {
            format!("{}.json", key)
        };
        Ok(self.root.join(file))
    }
}

impl DocumentStore for FileStore {
    fn save(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(&path, serde_json::to_string_pretty(value)?)?;
        debug!(path = %path.display(), "Document written");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store_last_write_wins() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("site").unwrap(), None);

        store.save("site", &json!({ "v": 1 })).unwrap();
        store.save("site", &json!({ "v": 2 })).unwrap();
        assert_eq!(store.load("site").unwrap(), Some(json!({ "v": 2 })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.load("theme").unwrap(), None);
        store.save("theme", &json!({ "colors": {} })).unwrap();
        assert_eq!(store.load("theme").unwrap(), Some(json!({ "colors": {} })));
        assert!(dir.path().join("nested/theme.json").exists());
        assert_eq!(store.load("theme.json").unwrap(), Some(json!({ "colors": {} })));
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let store = FileStore::new("/tmp/storefront");
        for key in ["", "..", "../etc/passwd", "a/b", "a\\b"] {
            assert!(matches!(store.path_for(key), Err(StoreError::InvalidKey(_))), "{}", key);
        }
    }
}
