//! Durable key-value preference storage

use crate::config::config_dir;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing the preference file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value store for user preferences, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, persisting it before returning
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Preferences kept as a flat JSON object on disk.
///
/// Without a backing path the store only lives in memory.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    const FILE_NAME: &'static str = "preferences.json";

    /// Open the store in the user's config directory.
    ///
    /// A missing or unreadable file yields an empty store; the failure is
    /// logged and the next write replaces the file.
    pub fn open_default() -> Self {
        let Some(path) = config_dir().map(|dir| dir.join(Self::FILE_NAME)) else {
            tracing::warn!("No config directory available, preferences will not persist");
            return Self::default();
        };

        match Self::open(&path) {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!("Ignoring unreadable preferences at {}: {err}", path.display());
                Self {
                    path: Some(path),
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    /// Open the store at an explicit path. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            entries,
        })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
