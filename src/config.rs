//! Board configuration.
//!
//! Settings come from the environment, with defaults for anything unset:
//!
//! - `KANBAN_STORAGE_DIR`: directory holding the storage files (`.kanban`)
//! - `KANBAN_STORAGE_KEY`: key the board is stored under (`kanban:tasks:v1`)
//! - `KANBAN_SEED_STARTER_TASKS`: whether a first run shows example tasks
//!   (`true`)

use crate::board::{
    adapters::file::FileStorage,
    domain::TaskCollection,
    ports::{StorageKey, StorageResult},
    services::{DEFAULT_STORAGE_KEY, KanbanBoard, TaskPersistence, starter_tasks},
};
use camino::Utf8PathBuf;
use std::env::{self, VarError};
use std::sync::Arc;
use thiserror::Error;

/// Environment variable naming the storage directory.
pub const STORAGE_DIR_VAR: &str = "KANBAN_STORAGE_DIR";
/// Environment variable naming the storage key.
pub const STORAGE_KEY_VAR: &str = "KANBAN_STORAGE_KEY";
/// Environment variable toggling starter tasks on first run.
pub const SEED_STARTER_TASKS_VAR: &str = "KANBAN_SEED_STARTER_TASKS";

/// Storage directory used when none is configured.
pub const DEFAULT_STORAGE_DIR: &str = ".kanban";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds bytes that are not valid Unicode.
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),

    /// A variable is set but blank.
    #[error("environment variable {0} must not be empty")]
    Empty(&'static str),

    /// A boolean variable holds an unrecognised value.
    #[error("environment variable {var} has invalid boolean value '{value}'")]
    InvalidFlag {
        /// Variable name.
        var: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Settings needed to open a persistent board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Directory holding the storage files.
    pub storage_dir: Utf8PathBuf,
    /// Key the collection is stored under.
    pub storage_key: StorageKey,
    /// Whether an empty first run starts with example tasks.
    pub seed_starter_tasks: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_dir: Utf8PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: StorageKey::new(DEFAULT_STORAGE_KEY),
            seed_starter_tasks: true,
        }
    }
}

impl BoardConfig {
    /// Reads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let storage_dir = read_var(STORAGE_DIR_VAR)?
            .map_or(defaults.storage_dir, Utf8PathBuf::from);
        let storage_key = read_var(STORAGE_KEY_VAR)?
            .map_or(defaults.storage_key, StorageKey::new);
        let seed_starter_tasks = match read_var(SEED_STARTER_TASKS_VAR)? {
            Some(value) => parse_flag(SEED_STARTER_TASKS_VAR, &value)?,
            None => defaults.seed_starter_tasks,
        };
        Ok(Self {
            storage_dir,
            storage_key,
            seed_starter_tasks,
        })
    }

    /// Returns the collection a board starts with when nothing is stored.
    #[must_use]
    pub fn default_collection(&self) -> TaskCollection {
        if self.seed_starter_tasks {
            starter_tasks()
        } else {
            TaskCollection::new()
        }
    }

    /// Opens file-backed storage and the board stored in it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::ports::StorageError`] when the storage
    /// directory cannot be created or opened.
    pub fn open_board(&self) -> StorageResult<KanbanBoard<FileStorage>> {
        let storage = FileStorage::open(&self.storage_dir)?;
        let persistence = TaskPersistence::new(Arc::new(storage), self.storage_key.clone());
        Ok(KanbanBoard::open(persistence, self.default_collection()))
    }
}

fn read_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_owned(),
        }),
    }
}
