//! Shared world state for kanban board BDD scenarios.

use std::sync::Arc;

use kanban::board::{
    adapters::memory::InMemoryStorage,
    domain::{Task, TaskCollection, TaskStatus},
    services::{KanbanBoard, TaskPersistence},
};
use rstest::fixture;

/// Board type used by the BDD world.
pub type TestBoard = KanbanBoard<InMemoryStorage>;

/// Scenario world for board behaviour tests.
#[derive(Default)]
pub struct BoardWorld {
    pub storage: InMemoryStorage,
    pub board: Option<TestBoard>,
}

impl BoardWorld {
    /// Opens a board over the world's storage.
    pub fn open(&mut self, default: TaskCollection) {
        let persistence = TaskPersistence::with_default_key(Arc::new(self.storage.clone()));
        self.board = Some(KanbanBoard::open(persistence, default));
    }

    /// Returns the open board.
    pub fn board(&self) -> eyre::Result<&TestBoard> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board has not been opened in scenario world"))
    }

    /// Returns the open board for mutation.
    pub fn board_mut(&mut self) -> eyre::Result<&mut TestBoard> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board has not been opened in scenario world"))
    }

    /// Finds a task on the open board by its title.
    pub fn task_titled(&self, title: &str) -> eyre::Result<Task> {
        self.board()?
            .tasks()
            .iter()
            .find(|task| task.title().as_str() == title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }
}

/// Parses a status name used in feature files.
pub fn parse_status(raw: &str) -> eyre::Result<TaskStatus> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
