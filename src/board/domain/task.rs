//! Task record and its persisted reconstruction data.

use super::{TaskId, TaskStatus, TaskTitle};
use serde::{Deserialize, Serialize};

/// A unit of work on the board.
///
/// Tasks are values: the store never edits one in place, it builds a
/// modified copy and places it in a new collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(default)]
    description: String,
    status: TaskStatus,
}

/// Parameter object for reconstructing a persisted or seeded task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted free-text description.
    pub description: String,
    /// Persisted board stage.
    pub status: TaskStatus,
}

impl Task {
    /// Creates a fresh backlog task with an empty description.
    #[must_use]
    pub const fn new(id: TaskId, title: TaskTitle) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            status: TaskStatus::Backlog,
        }
    }

    /// Reconstructs a task from persisted data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current board stage.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Whether the presentation layer offers deletion for this task.
    ///
    /// Deletion is only surfaced for backlog tasks. The store itself does
    /// not enforce this.
    #[must_use]
    pub const fn is_deletable(&self) -> bool {
        matches!(self.status, TaskStatus::Backlog)
    }

    /// Returns a copy of this task placed in `status`.
    #[must_use]
    pub fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Returns a copy of this task carrying `description`.
    #[must_use]
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }
}
