//! Key-value store backed by a single JSON object file.

use std::io;
use std::path::PathBuf;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::kernel::services::ports::KeyValueStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. Anything that cannot be read back starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|error| {
                tracing::warn!(path = %path.display(), error = %error, "discarding unreadable store file");
                FxHashMap::default()
            }),
            Err(error) if error.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(error) => {
                tracing::warn!(path = %path.display(), error = %error, "cannot read store file");
                FxHashMap::default()
            }
        };
        Self { path, entries }
    }

    pub fn try_set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    pub fn try_remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        std::fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        if let Err(error) = self.try_set(key, value) {
            tracing::warn!(key, error = %error, "failed to persist value");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(error) = self.try_remove(key) {
            tracing::warn!(key, error = %error, "failed to remove value");
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/file_store.rs"]
mod tests;
