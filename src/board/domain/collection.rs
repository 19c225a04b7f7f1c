//! Ordered, shared collection of tasks.

use super::{Task, TaskDomainError, TaskId};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered sequence of tasks with unique identifiers.
///
/// The task list lives behind an `Arc`, so cloning a collection is cheap and
/// yields a handle to the same allocation. [`TaskCollection::is_same_as`]
/// compares handles, which is how callers tell a no-op transformation from
/// a committed change. `PartialEq` compares content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Task>")]
pub struct TaskCollection {
    tasks: Arc<[Task]>,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::from(Vec::new()),
        }
    }

    /// Builds a collection from tasks in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTaskId`] when two tasks share an
    /// identifier.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, TaskDomainError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id()) {
                return Err(TaskDomainError::DuplicateTaskId(task.id().clone()));
            }
        }
        Ok(Self::from_unique(tasks))
    }

    /// Wraps tasks whose identifiers the caller has already checked.
    pub(crate) fn from_unique(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::from(tasks),
        }
    }

    /// Returns `true` when both handles point at the same task list.
    #[must_use]
    pub fn is_same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }

    /// Returns the tasks in collection order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates over the tasks in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the position of the task with `id`, if present.
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when a task with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the last task in collection order.
    #[must_use]
    pub fn last(&self) -> Option<&Task> {
        self.tasks.last()
    }
}

impl Default for TaskCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Task>> for TaskCollection {
    type Error = TaskDomainError;

    fn try_from(value: Vec<Task>) -> Result<Self, Self::Error> {
        Self::from_tasks(value)
    }
}

impl Serialize for TaskCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tasks.iter())
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
