use std::path::{Path, PathBuf};

use taskboard_core::{SqliteStore, TaskStore, TaskStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a temporary directory and database path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test_tasks.db");
    (temp_dir, db_path)
}

/// Helper function to open a store on the given database file
pub fn open_store(db_path: &Path) -> TaskStore<SqliteStore> {
    TaskStoreBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .expect("Failed to open task store")
}
