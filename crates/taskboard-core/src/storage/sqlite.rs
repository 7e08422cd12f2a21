//! SQLite-backed key-value store.

use std::path::Path;

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::{Result, StorageResultExt};

const SELECT_SLOT_SQL: &str = "SELECT value FROM kv_slots WHERE key = ?1";

const UPSERT_SLOT_SQL: &str = "INSERT INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// [`KeyValueStore`] keeping one row per slot in the `kv_slots` table.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open database connection")?;
        Self::with_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()
            .storage_context("Failed to open in-memory database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .storage_context("Failed to initialize database schema")
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to read slot")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let updated_at = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_SLOT_SQL, params![key, value, updated_at])
            .storage_context("Failed to write slot")?;
        debug!("Wrote {} bytes to slot '{key}'", value.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_slot_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("tasks").unwrap(), None);
    }

    #[test]
    fn test_upsert_overwrites_in_full() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("tasks", r#"[{"id":"1"}]"#).unwrap();
        store.set("tasks", "[]").unwrap();
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("tasks", "[]").unwrap();
        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("kv.db");

        {
            let mut store = SqliteStore::open(&db_path).unwrap();
            store.set("darkMode", "false").unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("false"));
    }
}
