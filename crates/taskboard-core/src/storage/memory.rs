//! In-memory key-value store.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{Result, TaskboardError};

/// `HashMap`-backed [`KeyValueStore`].
///
/// Writes can be made to fail on demand, which lets callers exercise the
/// task store's behaviour when persistence is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot already populated.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.into(), value.into());
        store
    }

    /// Makes every subsequent `set` fail until switched off again.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(TaskboardError::SlotWrite {
                key: key.to_string(),
                reason: "storage quota exceeded".to_string(),
            });
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
