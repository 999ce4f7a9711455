//! Key-value persistence collaborator.
//!
//! The event store writes its whole collection as one blob under a single
//! key, the way the browser widget this replaces used localStorage. The
//! collaborator knows nothing about events; it moves opaque strings.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CalpadError, CalpadResult};

/// The single key the event store persists under.
pub const EVENTS_KEY: &str = "calendarEvents";

/// A minimal string key-value store.
///
/// Reads are best-effort: a key that was never written returns `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> CalpadResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> CalpadResult<()>;
}

/// In-process store, for tests and embedders that manage persistence
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CalpadResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CalpadResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: a single JSON object file mapping keys to values.
///
/// A missing file reads as empty; every write rewrites the whole file,
/// creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> CalpadResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|e| CalpadError::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CalpadResult<Option<String>> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> CalpadResult<()> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&entries)
            .map_err(|e| CalpadError::Storage(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
