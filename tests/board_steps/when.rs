//! When steps for kanban board BDD scenarios.

use super::world::{BoardWorld, parse_status};
use kanban::board::{domain::TaskCollection, services::starter_tasks};
use rstest_bdd_macros::when;

#[when(r#"I add the task "{title}" to the backlog"#)]
fn add_task(world: &mut BoardWorld, title: String) -> eyre::Result<()> {
    world.board_mut()?.add_to_backlog(&title);
    Ok(())
}

#[when("I add a task with a blank title")]
fn add_blank_task(world: &mut BoardWorld) -> eyre::Result<()> {
    world.board_mut()?.add_to_backlog("   ");
    Ok(())
}

#[when(r#"I move the task "{title}" to "{status}""#)]
fn move_task(world: &mut BoardWorld, title: String, status: String) -> eyre::Result<()> {
    let target = parse_status(&status)?;
    let id = world.task_titled(&title)?.id().clone();
    world.board_mut()?.move_to(&id, target);
    Ok(())
}

#[when(r#"I describe the task "{title}" as "{description}""#)]
fn describe_task(world: &mut BoardWorld, title: String, description: String) -> eyre::Result<()> {
    let id = world.task_titled(&title)?.id().clone();
    world.board_mut()?.update_description(&id, &description);
    Ok(())
}

#[when(r#"I delete the task "{title}""#)]
fn delete_task(world: &mut BoardWorld, title: String) -> eyre::Result<()> {
    let id = world.task_titled(&title)?.id().clone();
    world.board_mut()?.delete_task(&id);
    Ok(())
}

#[when("the board is opened with starter tasks")]
fn open_with_starter_tasks(world: &mut BoardWorld) {
    world.open(starter_tasks());
}

#[when("the board is reopened")]
fn reopen_board(world: &mut BoardWorld) {
    world.board = None;
    world.open(TaskCollection::new());
}
