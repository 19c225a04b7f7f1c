//! Pure task store transformations.
//!
//! Every function takes the current collection and returns the next one
//! without touching the input. When nothing changes the input handle is
//! returned as is, so [`TaskCollection::is_same_as`] reports `true` and the
//! caller can skip persisting.

use crate::board::domain::{
    Task, TaskCollection, TaskId, TaskIdGenerator, TaskStatus, TaskTitle, UuidTaskIdGenerator,
};

/// Appends a new backlog task titled `title` with a random identifier.
///
/// Blank titles are ignored; surfacing the validation message is up to the
/// caller (see [`TaskTitle::new`]).
#[must_use]
pub fn add_to_backlog(tasks: &TaskCollection, title: &str) -> TaskCollection {
    add_to_backlog_with(tasks, title, &UuidTaskIdGenerator)
}

/// Attempts made with the injected generator before switching to fallback
/// identifiers.
const ID_ATTEMPTS: usize = 3;

/// Appends a new backlog task using identifiers from `ids`.
///
/// An identifier that is already taken is discarded and another requested.
/// After three collisions in a row a timestamp-plus-random identifier is
/// used instead, so a valid title always adds exactly one task.
#[must_use]
pub fn add_to_backlog_with(
    tasks: &TaskCollection,
    title: &str,
    ids: &impl TaskIdGenerator,
) -> TaskCollection {
    let Ok(task_title) = TaskTitle::new(title) else {
        return tasks.clone();
    };
    let id = fresh_id(tasks, ids);

    let mut next = tasks.as_slice().to_vec();
    next.push(Task::new(id, task_title));
    TaskCollection::from_unique(next)
}

/// Moves the task with `id` to `next_status` and places it last.
///
/// The task is cut from its current position and re-appended, so it always
/// ends up as the final entry of its destination column.
#[must_use]
pub fn move_to(tasks: &TaskCollection, id: &TaskId, next_status: TaskStatus) -> TaskCollection {
    let Some(moved) = tasks.get(id).map(|task| task.with_status(next_status)) else {
        return tasks.clone();
    };

    let mut next: Vec<Task> = tasks
        .iter()
        .filter(|task| task.id() != id)
        .cloned()
        .collect();
    next.push(moved);
    TaskCollection::from_unique(next)
}

/// Replaces the description of the task with `id`, keeping its position.
#[must_use]
pub fn update_description(tasks: &TaskCollection, id: &TaskId, description: &str) -> TaskCollection {
    match tasks.get(id) {
        Some(task) if task.description() != description => {}
        _ => return tasks.clone(),
    }

    let next = tasks
        .iter()
        .map(|task| {
            if task.id() == id {
                task.with_description(description)
            } else {
                task.clone()
            }
        })
        .collect();
    TaskCollection::from_unique(next)
}

/// Removes the task with `id`.
///
/// No status check happens here; offering deletion only for backlog tasks
/// is a presentation decision (see [`Task::is_deletable`]).
#[must_use]
pub fn delete_task(tasks: &TaskCollection, id: &TaskId) -> TaskCollection {
    if !tasks.contains(id) {
        return tasks.clone();
    }

    let next = tasks
        .iter()
        .filter(|task| task.id() != id)
        .cloned()
        .collect();
    TaskCollection::from_unique(next)
}

fn fresh_id(tasks: &TaskCollection, ids: &impl TaskIdGenerator) -> TaskId {
    for _ in 0..ID_ATTEMPTS {
        let id = ids.next_id();
        if !tasks.contains(&id) {
            return id;
        }
        tracing::warn!(task_id = %id, "generated task identifier already in use");
    }
    loop {
        let id = TaskId::fallback();
        if !tasks.contains(&id) {
            return id;
        }
    }
}
