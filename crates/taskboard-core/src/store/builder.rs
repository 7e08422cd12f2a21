//! Builder for opening a SQLite-backed task store.

use std::path::{Path, PathBuf};

use log::debug;

use super::TaskStore;
use crate::{
    error::{Result, TaskboardError},
    storage::SqliteStore,
};

/// Builder for creating and configuring durable [`TaskStore`] instances.
#[derive(Debug, Clone, Default)]
pub struct TaskStoreBuilder {
    database_path: Option<PathBuf>,
}

impl TaskStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/taskboard/taskboard.db` or
    /// `~/.local/share/taskboard/taskboard.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the database and hydrates the store from it.
    ///
    /// # Errors
    ///
    /// Returns `TaskboardError::FileSystem` if the parent directory cannot be
    /// created, `TaskboardError::XdgDirectory` if no default location exists
    /// and `TaskboardError::Storage` if the database cannot be opened.
    pub fn build(self) -> Result<TaskStore<SqliteStore>> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TaskboardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening task database at {}", db_path.display());
        let storage = SqliteStore::open(&db_path)?;
        Ok(TaskStore::open(storage))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("taskboard")
            .place_data_file("taskboard.db")
            .map_err(|e| TaskboardError::XdgDirectory(e.to_string()))
    }
}
