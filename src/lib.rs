//! Kanban: core of a single-user task board.
//!
//! Tasks flow through four fixed stages (backlog, ready, in progress,
//! finished) and are persisted to durable key-value storage after every
//! change.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task and collection types with no infrastructure
//!   dependencies
//! - **Ports**: The key-value storage contract
//! - **Adapters**: In-memory and file-backed storage
//! - **Services**: The task store, view projection, persistence adapter and
//!   the board shell tying them together
//!
//! # Modules
//!
//! - [`board`]: Task board domain, storage and services
//! - [`config`]: Environment-driven board configuration

pub mod board;
pub mod config;
