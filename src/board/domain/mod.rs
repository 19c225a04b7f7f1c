//! Domain model for the kanban board.
//!
//! Tasks, their stages and the ordered collection that holds them. Nothing
//! here touches storage or presentation.

mod collection;
mod error;
mod ids;
mod status;
mod task;

pub use collection::TaskCollection;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskIdGenerator, TaskTitle, UuidTaskIdGenerator};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
