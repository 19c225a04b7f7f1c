//! In-memory adapter implementations.
//!
//! Thread-safe storage suitable for unit tests and boards that do not need
//! to outlive the process.

mod storage;

pub use storage::InMemoryStorage;
