//! The task store: authoritative task collection plus its persistence.
//!
//! [`TaskStore`] owns the collection for the whole session. Each applied
//! mutation rewrites the `"tasks"` slot of its [`KeyValueStore`] in full.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  add / update / │    │    TaskStore    │    │  KeyValueStore  │
//! │     delete      │───▶│  (Vec<Task>)    │───▶│ ("tasks" slot)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Caller actions      In-memory truth        Durable snapshot
//! ```
//!
//! ## Failure model
//!
//! - A missing or unparseable slot at startup yields an empty collection;
//!   individual unreadable records are skipped.
//! - Invalid input (blank titles) is rejected before anything changes.
//! - Unknown ids are a no-op reported as `Ok(None)`.
//! - A failed write keeps the in-memory change; the store is left dirty
//!   until [`TaskStore::flush`] succeeds. Nothing is retried automatically.
//!
//! # Examples
//!
//! ```rust
//! use taskboard_core::{
//!     models::{NewTask, TaskStatus},
//!     storage::MemoryStore,
//!     store::TaskStore,
//! };
//!
//! let mut store = TaskStore::open(MemoryStore::new());
//! let task = store.add_task(NewTask::new("Buy milk"))?;
//! store.set_status(&task.id, TaskStatus::Completed)?;
//!
//! assert_eq!(store.stats().completed, 1);
//! # Ok::<(), taskboard_core::TaskboardError>(())
//! ```

use jiff::Timestamp;
use log::{debug, warn};

use crate::{
    error::Result,
    models::{NewTask, Task, TaskId, TaskStats, TaskStatus, TaskUpdate},
    storage::{KeyValueStore, TASKS_SLOT},
};

pub mod builder;


pub use builder::TaskStoreBuilder;

/// Owns the task collection and writes it through to a key-value slot.
pub struct TaskStore<S: KeyValueStore> {
    storage: S,
    tasks: Vec<Task>,
    last_issued_id: i64,
    dirty: bool,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Hydrates the store from the `"tasks"` slot of `storage`.
    pub fn open(storage: S) -> Self {
        let tasks = Self::hydrate(&storage);
        let last_issued_id = tasks
            .iter()
            .filter_map(|task| task.id.as_str().parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        debug!("Loaded {} tasks", tasks.len());

        Self {
            storage,
            tasks,
            last_issued_id,
            dirty: false,
        }
    }

    fn hydrate(storage: &S) -> Vec<Task> {
        let raw = match storage.get(TASKS_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read saved tasks, starting empty: {e}");
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Saved tasks are unreadable, starting empty: {e}");
                return Vec::new();
            }
        };

        // Records are decoded one at a time so a single bad entry only costs
        // that entry.
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Task>(record) {
                Ok(mut task) => {
                    task.completed = task.status == TaskStatus::Completed;
                    Some(task)
                }
                Err(e) => {
                    warn!("Skipping unreadable saved task at position {index}: {e}");
                    None
                }
            })
            .collect()
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from(self.tasks.as_slice())
    }

    /// Appends a new task and persists the collection.
    ///
    /// # Errors
    ///
    /// Returns `TaskboardError::InvalidInput` for a blank title; the
    /// collection is left unchanged.
    pub fn add_task(&mut self, input: NewTask) -> Result<Task> {
        input.validate()?;

        let now = Timestamp::now();
        let id = self.next_id(now);
        let task = Task::new(id, input, now);
        self.tasks.push(task.clone());

        debug!("Added task {}", task.id);
        self.persist();
        Ok(task)
    }

    /// Merges `update` into the task with `id` and persists the collection.
    ///
    /// Returns `Ok(None)` without touching anything when no task matches,
    /// whatever the update carries.
    ///
    /// # Errors
    ///
    /// Returns `TaskboardError::InvalidInput` when the update for an existing
    /// task carries a blank title.
    pub fn update_task(&mut self, id: &TaskId, update: TaskUpdate) -> Result<Option<Task>> {
        let Some(index) = self.position(id) else {
            debug!("Update for unknown task {id} ignored");
            return Ok(None);
        };

        update.validate()?;

        if update.is_empty() {
            return Ok(Some(self.tasks[index].clone()));
        }

        let updated = update.apply_to(self.tasks[index].clone(), Timestamp::now());
        self.tasks[index] = updated.clone();

        debug!("Updated task {id}");
        self.persist();
        Ok(Some(updated))
    }

    /// Moves a task to `status`; the Start, Complete and Reopen actions.
    pub fn set_status(&mut self, id: &TaskId, status: TaskStatus) -> Result<Option<Task>> {
        self.update_task(id, TaskUpdate::status(status))
    }

    /// Removes the task with `id`, returning it. Unknown ids are a no-op.
    pub fn delete_task(&mut self, id: &TaskId) -> Result<Option<Task>> {
        let Some(index) = self.position(id) else {
            debug!("Delete for unknown task {id} ignored");
            return Ok(None);
        };

        let removed = self.tasks.remove(index);
        debug!("Deleted task {id}");
        self.persist();
        Ok(Some(removed))
    }

    /// Returns true when the last write to storage failed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the collection again if an earlier write failed.
    pub fn flush(&mut self) -> Result<()> {
        if self.dirty {
            self.write_snapshot()?;
            self.dirty = false;
        }
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == id)
    }

    /// Millisecond timestamps, bumped past the last issued id so that two
    /// tasks created within the same millisecond stay distinct. Saved ids are
    /// opaque, so the result is also checked against the collection.
    fn next_id(&mut self, now: Timestamp) -> TaskId {
        let floor = now.as_millisecond();
        let mut candidate = self
            .last_issued_id
            .checked_add(1)
            .map_or(floor, |next| next.max(floor));

        loop {
            let id = TaskId::new(candidate.to_string());
            if self.position(&id).is_none() {
                self.last_issued_id = self.last_issued_id.max(candidate);
                return id;
            }
            candidate = candidate.saturating_add(1);
        }
    }

    fn persist(&mut self) {
        match self.write_snapshot() {
            Ok(()) => self.dirty = false,
            Err(e) => {
                warn!("Failed to save tasks, changes kept in memory: {e}");
                self.dirty = true;
            }
        }
    }

    fn write_snapshot(&mut self) -> Result<()> {
        let encoded = serde_json::to_string(&self.tasks)?;
        self.storage.set(TASKS_SLOT, &encoded)
    }
}
