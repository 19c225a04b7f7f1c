//! Filesystem adapter implementations.

mod key;
mod storage;

pub use storage::FileStorage;
