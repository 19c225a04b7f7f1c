//! Board shell owning the canonical task collection.

use super::{
    persistence::{PersistenceError, TaskPersistence},
    projection::{self, BoardView, TaskCounts},
    store,
};
use crate::board::{
    domain::{Task, TaskCollection, TaskId, TaskIdGenerator, TaskStatus, UuidTaskIdGenerator},
    ports::KeyValueStorage,
};
use std::fmt;

/// Outcome of a board action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardChange {
    /// The collection changed and was written through.
    Committed,
    /// The action was a no-op: blank title or unknown task.
    Unchanged,
}

impl BoardChange {
    /// Returns `true` for [`BoardChange::Committed`].
    #[must_use]
    pub const fn is_committed(self) -> bool {
        matches!(self, Self::Committed)
    }
}

type Observer = Box<dyn Fn(&TaskCollection) + Send + Sync>;

/// Holds the single canonical task collection and exposes the actions the
/// presentation layer may perform on it.
///
/// Every action runs the matching store transformation. When the store
/// returns a new collection the board adopts it, writes it through to
/// storage and notifies observers; a returned input handle means nothing
/// happened.
///
/// A failed write does not roll back the in-memory state. The error is
/// logged and kept in [`KanbanBoard::last_write_error`] until a later write
/// succeeds.
pub struct KanbanBoard<S, G = UuidTaskIdGenerator>
where
    S: KeyValueStorage,
    G: TaskIdGenerator,
{
    persistence: TaskPersistence<S>,
    ids: G,
    tasks: TaskCollection,
    observers: Vec<Observer>,
    last_write_error: Option<PersistenceError>,
}

impl<S> KanbanBoard<S>
where
    S: KeyValueStorage,
{
    /// Opens the board from storage, using `default` when nothing usable is
    /// stored.
    #[must_use]
    pub fn open(persistence: TaskPersistence<S>, default: TaskCollection) -> Self {
        Self::open_with_ids(persistence, default, UuidTaskIdGenerator)
    }
}

impl<S, G> KanbanBoard<S, G>
where
    S: KeyValueStorage,
    G: TaskIdGenerator,
{
    /// Opens the board with a custom identifier generator.
    #[must_use]
    pub fn open_with_ids(persistence: TaskPersistence<S>, default: TaskCollection, ids: G) -> Self {
        let tasks = persistence.load_or(default);
        tracing::info!(key = %persistence.key(), tasks = tasks.len(), "opened kanban board");
        Self {
            persistence,
            ids,
            tasks,
            observers: Vec::new(),
            last_write_error: None,
        }
    }

    /// Adds a backlog task titled `title`. Blank titles are ignored.
    pub fn add_to_backlog(&mut self, title: &str) -> BoardChange {
        let next = store::add_to_backlog_with(&self.tasks, title, &self.ids);
        self.commit(next, "add_to_backlog")
    }

    /// Moves task `id` to `status`, placing it last in that column.
    pub fn move_to(&mut self, id: &TaskId, status: TaskStatus) -> BoardChange {
        let next = store::move_to(&self.tasks, id, status);
        self.commit(next, "move_to")
    }

    /// Replaces the description of task `id`.
    pub fn update_description(&mut self, id: &TaskId, description: &str) -> BoardChange {
        let next = store::update_description(&self.tasks, id, description);
        self.commit(next, "update_description")
    }

    /// Deletes task `id`.
    pub fn delete_task(&mut self, id: &TaskId) -> BoardChange {
        let next = store::delete_task(&self.tasks, id);
        self.commit(next, "delete_task")
    }

    /// Registers a callback invoked with the new collection after each
    /// committed change.
    pub fn subscribe(&mut self, observer: impl Fn(&TaskCollection) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the current collection.
    #[must_use]
    pub const fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    /// Returns a single task.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        projection::find_task(&self.tasks, id)
    }

    /// Counts active and finished tasks in the current collection.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        projection::counts(&self.tasks)
    }

    /// Groups the current collection into columns.
    #[must_use]
    pub fn view(&self) -> BoardView {
        projection::project(&self.tasks)
    }

    /// Returns the error from the most recent write, if it failed.
    #[must_use]
    pub const fn last_write_error(&self) -> Option<&PersistenceError> {
        self.last_write_error.as_ref()
    }

    fn commit(&mut self, next: TaskCollection, action: &'static str) -> BoardChange {
        if next.is_same_as(&self.tasks) {
            tracing::trace!(action, "board action left tasks unchanged");
            return BoardChange::Unchanged;
        }

        self.tasks = next;
        tracing::debug!(action, tasks = self.tasks.len(), "committed board change");
        match self.persistence.save(&self.tasks) {
            Ok(()) => self.last_write_error = None,
            Err(err) => {
                tracing::error!(action, key = %self.persistence.key(), error = %err, "failed to persist tasks; changes are kept in memory only");
                self.last_write_error = Some(err);
            }
        }
        for observer in &self.observers {
            observer(&self.tasks);
        }
        BoardChange::Committed
    }
}

impl<S, G> fmt::Debug for KanbanBoard<S, G>
where
    S: KeyValueStorage,
    G: TaskIdGenerator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KanbanBoard")
            .field("key", self.persistence.key())
            .field("tasks", &self.tasks)
            .field("observers", &self.observers.len())
            .field("last_write_error", &self.last_write_error)
            .finish_non_exhaustive()
    }
}
