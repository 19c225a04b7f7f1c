//! Application services for the kanban board.
//!
//! - [`store`]: pure transformations over the task collection
//! - [`projection`]: columns, move sources and counters
//! - [`persistence`]: load-once, write-through storage of the collection
//! - [`board`]: the shell that owns the collection and exposes actions

pub mod board;
pub mod persistence;
pub mod projection;
pub mod seed;
pub mod store;

pub use board::{BoardChange, KanbanBoard};
pub use persistence::{DEFAULT_STORAGE_KEY, PersistenceError, PersistenceResult, TaskPersistence};
pub use projection::{BoardView, ColumnView, ProjectionCache, TaskCounts};
pub use seed::starter_tasks;
