//! Kanban board core.
//!
//! Tasks move through four fixed stages: backlog, ready, in progress and
//! finished. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store, projection, persistence and the board shell in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
