//! Board stages a task moves through.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a task on the board.
///
/// Variants are declared in board order, so the derived `Ord` gives
/// `Backlog < Ready < InProgress < Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    /// Task is captured but not yet planned.
    Backlog,
    /// Task is planned and can be picked up.
    Ready,
    /// Task is being worked on.
    #[serde(alias = "in_progress")]
    InProgress,
    /// Task is done.
    Finished,
}

impl TaskStatus {
    /// All statuses in board order.
    pub const ALL: [Self; 4] = [Self::Backlog, Self::Ready, Self::InProgress, Self::Finished];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Ready => "ready",
            Self::InProgress => "inProgress",
            Self::Finished => "finished",
        }
    }

    /// Returns the column heading shown for this status.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Ready => "Ready",
            Self::InProgress => "In progress",
            Self::Finished => "Finished",
        }
    }

    /// Returns the stage immediately before this one.
    ///
    /// `Backlog` has no predecessor: tasks enter it only by being added.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Backlog => None,
            Self::Ready => Some(Self::Backlog),
            Self::InProgress => Some(Self::Ready),
            Self::Finished => Some(Self::InProgress),
        }
    }

    /// Returns the stage immediately after this one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Backlog => Some(Self::Ready),
            Self::Ready => Some(Self::InProgress),
            Self::InProgress => Some(Self::Finished),
            Self::Finished => None,
        }
    }

    /// Returns `true` for every stage except `Finished`.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Finished)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "backlog" => Ok(Self::Backlog),
            "ready" => Ok(Self::Ready),
            "inProgress" | "in_progress" => Ok(Self::InProgress),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
