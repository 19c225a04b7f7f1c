//! Then steps for kanban board BDD scenarios.

use std::sync::Arc;

use super::world::{BoardWorld, parse_status};
use kanban::board::{
    domain::TaskCollection,
    services::{TaskCounts, TaskPersistence, projection::by_status},
};
use rstest_bdd_macros::then;

#[then("the task count is {count:usize}")]
fn task_count_is(world: &BoardWorld, count: usize) -> eyre::Result<()> {
    let actual = world.board()?.tasks().len();
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then(r#"the task "{title}" is in "{status}""#)]
fn task_is_in(world: &BoardWorld, title: String, status: String) -> eyre::Result<()> {
    let expected = parse_status(&status)?;
    let task = world.task_titled(&title)?;
    eyre::ensure!(
        task.status() == expected,
        "expected {title:?} in {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the task "{title}" has description "{description}""#)]
fn task_has_description(world: &BoardWorld, title: String, description: String) -> eyre::Result<()> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(
        task.description() == description,
        "expected description {description:?}, found {:?}",
        task.description()
    );
    Ok(())
}

#[then(r#"the "{status}" column lists "{titles}""#)]
fn column_lists(world: &BoardWorld, status: String, titles: String) -> eyre::Result<()> {
    let column = parse_status(&status)?;
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();
    let tasks = world.board()?.tasks();
    let actual: Vec<&str> = by_status(tasks, column)
        .into_iter()
        .map(|task| task.title().as_str())
        .collect();
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then(r#"the "{status}" column is empty"#)]
fn column_is_empty(world: &BoardWorld, status: String) -> eyre::Result<()> {
    let column = parse_status(&status)?;
    let tasks = world.board()?.tasks();
    eyre::ensure!(by_status(tasks, column).is_empty(), "{status} column is not empty");
    Ok(())
}

#[then("the footer shows {active:usize} active and {finished:usize} finished")]
fn footer_shows(world: &BoardWorld, active: usize, finished: usize) -> eyre::Result<()> {
    let counts = world.board()?.counts();
    eyre::ensure!(
        counts == TaskCounts { active, finished },
        "unexpected counters {counts:?}"
    );
    Ok(())
}

#[then("the stored board matches the current board")]
fn stored_matches_current(world: &BoardWorld) -> eyre::Result<()> {
    let stored = TaskPersistence::with_default_key(Arc::new(world.storage.clone()))
        .try_load()?
        .unwrap_or_else(TaskCollection::new);
    eyre::ensure!(stored == *world.board()?.tasks(), "stored board diverged");
    Ok(())
}
