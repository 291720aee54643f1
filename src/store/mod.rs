//! Persistent key-value storage.
//!
//! Screens read and write small string values (timestamps, notes) through the
//! [`KeyValueStore`] trait. Two backends exist:
//!
//! - `MemoryStore` - process-local map, test builds only
//! - [`JsonFileStore`] - a JSON object on disk under the user data directory

use async_trait::async_trait;
use thiserror::Error;

mod file;
#[cfg(test)]
mod memory;

pub use file::JsonFileStore;
#[cfg(test)]
pub use memory::MemoryStore;

// ============================================================================
// Error Type
// ============================================================================

/// Errors raised by store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object.
    #[error("Storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The storage location could not be determined.
    #[error("Storage location unavailable: {0}")]
    Location(String),
}

// ============================================================================
// Store Trait
// ============================================================================

/// Asynchronous string key-value store.
///
/// Values are opaque strings; callers decide the encoding (JSON for
/// timestamps, plain text for notes).
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Read the value under `key`, or `None` if nothing is stored.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}
