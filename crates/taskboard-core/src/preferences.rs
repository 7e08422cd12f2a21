//! Display preferences stored next to the task collection.

use log::warn;

use crate::{
    error::Result,
    storage::{KeyValueStore, DARK_MODE_SLOT},
};

/// User display preferences. Independent of task state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Preferences {
    /// Reads preferences, falling back to defaults for missing or malformed
    /// values.
    pub fn load<S: KeyValueStore>(storage: &S) -> Self {
        let dark_mode = match storage.get(DARK_MODE_SLOT) {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed dark mode preference {raw:?}: {e}");
                false
            }),
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to read dark mode preference: {e}");
                false
            }
        };
        Self { dark_mode }
    }

    pub fn set_dark_mode<S: KeyValueStore>(&mut self, storage: &mut S, enabled: bool) -> Result<()> {
        self.dark_mode = enabled;
        storage.set(DARK_MODE_SLOT, &serde_json::to_string(&enabled)?)
    }

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode<S: KeyValueStore>(&mut self, storage: &mut S) -> Result<bool> {
        let enabled = !self.dark_mode;
        self.set_dark_mode(storage, enabled)?;
        Ok(enabled)
    }
}
