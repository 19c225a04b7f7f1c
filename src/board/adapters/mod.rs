//! Storage adapters for the board module.
//!
//! Concrete implementations of the [`KeyValueStorage`] port:
//!
//! - [`memory::InMemoryStorage`]: process-local map, with an optional quota
//!   for exercising write failures
//! - [`file::FileStorage`]: one file per key inside a directory
//!
//! [`KeyValueStorage`]: crate::board::ports::KeyValueStorage

pub mod file;
pub mod memory;
