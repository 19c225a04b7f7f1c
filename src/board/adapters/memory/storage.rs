//! Map-backed key-value storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{KeyValueStorage, StorageError, StorageKey, StorageResult};

/// Thread-safe in-memory key-value storage.
///
/// Clones share the same underlying map, so a test can hand one clone to a
/// board and inspect what was written through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    state: Arc<RwLock<InMemoryStorageState>>,
}

#[derive(Debug, Default)]
struct InMemoryStorageState {
    entries: HashMap<StorageKey, String>,
    quota: Option<usize>,
}

impl InMemoryStorage {
    /// Creates empty storage with no quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty storage that rejects values longer than `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        let storage = Self::new();
        if let Ok(mut state) = storage.state.write() {
            state.quota = Some(bytes);
        }
        storage
    }

    /// Seeds a raw value under `key`, bypassing the quota.
    #[must_use]
    pub fn with_entry(self, key: StorageKey, value: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.entries.insert(key, value.into());
        }
        self
    }
}

fn lock_error(err: impl ToString) -> StorageError {
    StorageError::persistence(std::io::Error::other(err.to_string()))
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &StorageKey) -> StorageResult<Option<String>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &StorageKey, value: &str) -> StorageResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(quota) = state.quota
            && value.len() > quota
        {
            return Err(StorageError::QuotaExceeded {
                key: key.clone(),
                bytes: value.len(),
            });
        }
        state.entries.insert(key.clone(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &StorageKey) -> StorageResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.entries.remove(key);
        Ok(())
    }
}
