//! Read-side projections of the task collection.
//!
//! Columns, move sources and counters are derived from the collection on
//! demand. [`ProjectionCache`] is the only memoisation, and it is keyed by
//! a content fingerprint so it can never serve a stale board.

use crate::board::domain::{Task, TaskCollection, TaskId, TaskStatus};
use sha2::{Digest, Sha256};
use std::fmt;

/// Returns the tasks in `status`, in collection order.
#[must_use]
pub fn by_status(tasks: &TaskCollection, status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|task| task.status() == status).collect()
}

/// Returns the tasks a column may pull in: those one stage earlier.
///
/// `None` for the backlog, which is filled only by adding tasks.
#[must_use]
pub fn source_for(tasks: &TaskCollection, status: TaskStatus) -> Option<Vec<&Task>> {
    status.prev().map(|prev| by_status(tasks, prev))
}

/// Whether a column currently has anything to move into it.
#[must_use]
pub fn can_move_into(tasks: &TaskCollection, status: TaskStatus) -> bool {
    status
        .prev()
        .is_some_and(|prev| tasks.iter().any(|task| task.status() == prev))
}

/// Looks up a single task for a detail view.
#[must_use]
pub fn find_task<'a>(tasks: &'a TaskCollection, id: &TaskId) -> Option<&'a Task> {
    tasks.get(id)
}

/// Aggregate task counters shown in the board footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    /// Tasks not yet finished.
    pub active: usize,
    /// Finished tasks.
    pub finished: usize,
}

/// Counts active and finished tasks.
#[must_use]
pub fn counts(tasks: &TaskCollection) -> TaskCounts {
    let active = tasks.iter().filter(|task| task.status().is_active()).count();
    TaskCounts {
        active,
        finished: tasks.len() - active,
    }
}

/// One board column ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    /// Stage shown by the column.
    pub status: TaskStatus,
    /// Column heading.
    pub title: &'static str,
    /// Tasks in the column, in collection order.
    pub tasks: Vec<Task>,
    /// Tasks the column's move control offers; `None` for the backlog.
    pub source: Option<Vec<Task>>,
}

impl ColumnView {
    /// Whether the column's move control has anything to offer.
    #[must_use]
    pub fn accepts_moves(&self) -> bool {
        self.source.as_ref().is_some_and(|source| !source.is_empty())
    }
}

/// The whole board grouped by stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Columns in board order.
    pub columns: Vec<ColumnView>,
    /// Footer counters.
    pub counts: TaskCounts,
}

impl BoardView {
    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView> {
        self.columns.iter().find(|column| column.status == status)
    }
}

fn owned(tasks: Vec<&Task>) -> Vec<Task> {
    tasks.into_iter().cloned().collect()
}

/// Groups the collection into board columns.
#[must_use]
pub fn project(tasks: &TaskCollection) -> BoardView {
    let columns = TaskStatus::ALL
        .into_iter()
        .map(|status| ColumnView {
            status,
            title: status.title(),
            tasks: owned(by_status(tasks, status)),
            source: source_for(tasks, status).map(owned),
        })
        .collect();
    BoardView {
        columns,
        counts: counts(tasks),
    }
}

/// SHA-256 digest of a collection's content, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionFingerprint([u8; 32]);

impl CollectionFingerprint {
    /// Computes the fingerprint of `tasks`.
    #[must_use]
    pub fn of(tasks: &TaskCollection) -> Self {
        let mut hasher = Sha256::new();
        for task in tasks {
            for field in [
                task.id().as_str(),
                task.title().as_str(),
                task.description(),
                task.status().as_str(),
            ] {
                // Length-prefix each field so adjacent fields cannot blur.
                hasher.update(field.len().to_string());
                hasher.update(b":");
                hasher.update(field);
            }
        }
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for CollectionFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Memoised [`BoardView`], recomputed whenever the collection's content
/// fingerprint changes.
#[derive(Debug, Clone, Default)]
pub struct ProjectionCache {
    entry: Option<(CollectionFingerprint, BoardView)>,
}

impl ProjectionCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Returns the board view for `tasks`, reusing the cached one when the
    /// content is unchanged.
    pub fn view(&mut self, tasks: &TaskCollection) -> &BoardView {
        let fingerprint = CollectionFingerprint::of(tasks);
        let stale = self
            .entry
            .as_ref()
            .is_none_or(|(cached, _)| *cached != fingerprint);
        if stale {
            tracing::trace!(%fingerprint, "recomputing board projection");
            self.entry = Some((fingerprint, project(tasks)));
        }
        let (_, view) = self.entry.get_or_insert_with(|| (fingerprint, project(tasks)));
        view
    }

    /// Returns the fingerprint of the cached view, if any.
    #[must_use]
    pub fn fingerprint(&self) -> Option<CollectionFingerprint> {
        self.entry.as_ref().map(|(fingerprint, _)| *fingerprint)
    }

    /// Drops the cached view.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
