//! Given steps for kanban board BDD scenarios.

use super::world::{BoardWorld, parse_status};
use kanban::board::{
    domain::{TaskCollection, TaskStatus},
    ports::StorageKey,
    services::DEFAULT_STORAGE_KEY,
};
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) {
    world.open(TaskCollection::new());
}

#[given(r#"a task "{title}" in "{status}""#)]
fn task_in_status(world: &mut BoardWorld, title: String, status: String) -> eyre::Result<()> {
    let target = parse_status(&status)?;
    world.board_mut()?.add_to_backlog(&title);
    if target != TaskStatus::Backlog {
        let id = world.task_titled(&title)?.id().clone();
        world.board_mut()?.move_to(&id, target);
    }
    Ok(())
}

#[given(r#"stored board data "{payload}""#)]
fn stored_board_data(world: &mut BoardWorld, payload: String) {
    world.storage = world
        .storage
        .clone()
        .with_entry(StorageKey::new(DEFAULT_STORAGE_KEY), payload);
}
