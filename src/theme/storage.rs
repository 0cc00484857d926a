//! Key-value persistence for the theme preference.
//!
//! The provider only needs to read and write one string under one key, so the
//! [`ThemeStorage`] trait is deliberately small. Two implementations ship:
//!
//! - [`MemoryStorage`]: an in-process map, useful for tests and for pages that
//!   should forget the preference on exit
//! - [`FileStorage`]: a JSON object on disk, shared between CLI invocations

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A string key-value store the provider persists its preference into.
pub trait ThemeStorage {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Storage that lives only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a JSON object file (`{"theme": "dark"}`).
///
/// A missing file reads as empty. Writes rewrite the whole file, keeping any
/// unrelated keys already present.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| Error::StorageCorrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

impl ThemeStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    /// A corrupt file is replaced rather than blocking the write.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e @ Error::StorageCorrupt { .. }) => {
                tracing::warn!(error = %e, "discarding corrupt theme store");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}
