//! JSON file store backend.
//!
//! The whole store is a single JSON object. Values are written as strings;
//! non-string values left by other writers are read back as their JSON text,
//! so a raw number reads as `"1700000000000"`. Every operation
//! re-reads the file so that values written by `lazybolt stamp` from another
//! process are visible to a running TUI. Writes go to a sibling temp file and
//! are renamed into place.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;

use crate::state::platform::paths::AppPaths;

use super::{KeyValueStore, StoreError};

/// Default store file name inside the data directory.
pub const STORE_FILE_NAME: &str = "storage.json";

type Items = BTreeMap<String, Value>;

/// A [`KeyValueStore`] persisted as a JSON object file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens (without creating) the store at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Opens the store at the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Location`] if the data directory cannot be
    /// determined or created.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = AppPaths::new()
            .data_dir()
            .map_err(|e| StoreError::Location(e.to_string()))?;
        Ok(Self::new(dir.join(STORE_FILE_NAME)))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_items(&self) -> Result<Items, StoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Items::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Items::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_items(&self, items: &Items) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(match self.read_items().await?.remove(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value),
            Some(other) => Some(other.to_string()),
        })
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read_items().await?;
        items.insert(key.to_string(), Value::String(value.to_string()));
        self.write_items(&items).await?;
        tracing::debug!(key, path = %self.path.display(), "stored item");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read_items().await?;
        if items.remove(key).is_some() {
            self.write_items(&items).await?;
        }
        Ok(())
    }
}
