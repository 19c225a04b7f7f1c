//! Storage port for durable key-value persistence of board state.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Key under which a value is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Creates a storage key.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Durable string key-value store.
///
/// Each call is a single blocking operation. A `set` replaces the whole
/// value atomically; a later `get` on the same key observes it.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key has never been written or was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn get(&self, key: &StorageKey) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QuotaExceeded`] when the store is full or
    /// [`StorageError::Persistence`] when the write fails.
    fn set(&self, key: &StorageKey, value: &str) -> StorageResult<()>;

    /// Removes the value stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be modified.
    fn remove(&self, key: &StorageKey) -> StorageResult<()>;
}

/// Errors returned by key-value storage implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Writing the value would exceed the store's capacity.
    #[error("storage quota exceeded writing {bytes} bytes to {key}")]
    QuotaExceeded {
        /// Key being written.
        key: StorageKey,
        /// Size of the rejected value in bytes.
        bytes: usize,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
