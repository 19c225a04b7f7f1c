//! Persistence adapter that mirrors the task collection into key-value
//! storage.

use crate::board::{
    domain::TaskCollection,
    ports::{KeyValueStorage, StorageError, StorageKey},
};
use std::sync::Arc;
use thiserror::Error;

/// Key the board is stored under unless configured otherwise.
///
/// The schema version lives only in the key name; there is no envelope in
/// the payload.
pub const DEFAULT_STORAGE_KEY: &str = "kanban:tasks:v1";

/// Errors raised while reading or writing the stored collection.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The storage port failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored payload could not be decoded, or the collection could not
    /// be encoded.
    #[error("invalid task payload: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Loads and saves the full task collection under one storage key.
#[derive(Debug)]
pub struct TaskPersistence<S>
where
    S: KeyValueStorage,
{
    storage: Arc<S>,
    key: StorageKey,
}

impl<S> TaskPersistence<S>
where
    S: KeyValueStorage,
{
    /// Creates an adapter for `key` on `storage`.
    #[must_use]
    pub const fn new(storage: Arc<S>, key: StorageKey) -> Self {
        Self { storage, key }
    }

    /// Creates an adapter using [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn with_default_key(storage: Arc<S>) -> Self {
        Self::new(storage, StorageKey::new(DEFAULT_STORAGE_KEY))
    }

    /// Returns the storage key.
    #[must_use]
    pub const fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Reads and decodes the stored collection.
    ///
    /// Returns `Ok(None)` when nothing (or an empty payload) is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Storage`] when the read fails and
    /// [`PersistenceError::Codec`] when the payload is not a valid task
    /// list, including blank titles and duplicate identifiers.
    pub fn try_load(&self) -> PersistenceResult<Option<TaskCollection>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        let tasks = serde_json::from_str(&raw)?;
        Ok(Some(tasks))
    }

    /// Loads the stored collection, falling back to `default` when nothing
    /// usable is stored.
    ///
    /// Never fails: read errors and corrupt payloads are logged and replaced
    /// by `default`.
    #[must_use]
    pub fn load_or(&self, default: TaskCollection) -> TaskCollection {
        match self.try_load() {
            Ok(Some(tasks)) => {
                tracing::debug!(key = %self.key, tasks = tasks.len(), "loaded stored tasks");
                tasks
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored tasks, using defaults");
                default
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding unreadable stored tasks, using defaults");
                default
            }
        }
    }

    /// Writes the whole collection, replacing the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when encoding or the storage write
    /// fails.
    pub fn save(&self, tasks: &TaskCollection) -> PersistenceResult<()> {
        let payload = serde_json::to_string(tasks)?;
        self.storage.set(&self.key, &payload)?;
        tracing::debug!(key = %self.key, tasks = tasks.len(), bytes = payload.len(), "saved tasks");
        Ok(())
    }

    /// Removes the stored collection.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Storage`] when the removal fails.
    pub fn clear(&self) -> PersistenceResult<()> {
        self.storage.remove(&self.key)?;
        Ok(())
    }
}
