//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod storage;

pub use storage::{KeyValueStorage, StorageError, StorageKey, StorageResult};

#[cfg(test)]
pub use storage::MockKeyValueStorage;
