//! Key-value persistence port and its adapters.
//!
//! The task store never touches a concrete backend. It talks to a
//! [`KeyValueStore`], which holds named string slots:
//!
//! - [`MemoryStore`]: process-local map, used by tests and embedders
//! - [`SqliteStore`]: one row per slot in a SQLite file
//!
//! Writes overwrite a slot in full; there is no transactional contract
//! across slots.

use crate::error::Result;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Slot holding the JSON-encoded task collection.
pub const TASKS_SLOT: &str = "tasks";

/// Slot holding the JSON boolean dark mode preference.
pub const DARK_MODE_SLOT: &str = "darkMode";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Reads a slot. `Ok(None)` means the slot has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites a slot with `value`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
