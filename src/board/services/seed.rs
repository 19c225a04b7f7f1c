//! Starter tasks shown on a first run.

use crate::board::domain::{
    PersistedTaskData, Task, TaskCollection, TaskDomainError, TaskId, TaskStatus, TaskTitle,
};

const STARTER_TASKS: [(&str, &str, &str, TaskStatus); 4] = [
    ("t-1", "Define requirements", "", TaskStatus::Backlog),
    ("t-2", "Setup project", "CRA + TS", TaskStatus::Ready),
    ("t-3", "Implement board UI", "", TaskStatus::InProgress),
    ("t-4", "Ship to prod", "Celebrate responsibly.", TaskStatus::Finished),
];

/// Returns one example task per column.
#[must_use]
pub fn starter_tasks() -> TaskCollection {
    build_starter_tasks().unwrap_or_default()
}

fn build_starter_tasks() -> Result<TaskCollection, TaskDomainError> {
    let tasks = STARTER_TASKS
        .into_iter()
        .map(|(id, title, description, status)| {
            Ok(Task::from_persisted(PersistedTaskData {
                id: TaskId::new(id),
                title: TaskTitle::new(title)?,
                description: description.to_owned(),
                status,
            }))
        })
        .collect::<Result<Vec<_>, TaskDomainError>>()?;
    TaskCollection::from_tasks(tasks)
}
