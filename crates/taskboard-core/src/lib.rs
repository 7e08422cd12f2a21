//! Core library for the Taskboard task tracker.
//!
//! This crate provides the business logic for tracking tasks: the task
//! model, a store that owns the collection and persists it through a
//! key-value port, derived filter/sort views, display formatting and error
//! handling.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   TaskStore     │    │  KeyValueStore  │    │  Memory/SQLite  │
//! │ (add, update,   │───▶│  (get / set)    │───▶│    adapters     │
//! │  delete)        │    │                 │    │                 │
//! └────────┬────────┘    └─────────────────┘    └─────────────────┘
//!          │ &[Task]
//!          ▼
//! ┌─────────────────┐    ┌─────────────────┐
//! │  view::derive   │───▶│    display      │
//! │ (filter, sort)  │    │   (markdown)    │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use taskboard_core::{
//!     models::{NewTask, TaskStatus},
//!     storage::MemoryStore,
//!     view::{derive, SortState, StatusFilter},
//!     TaskStore,
//! };
//!
//! let mut store = TaskStore::open(MemoryStore::new());
//! let task = store.add_task(NewTask::new("Plan the week"))?;
//! store.set_status(&task.id, TaskStatus::InProgress)?;
//!
//! let in_progress = derive(store.tasks(), StatusFilter::InProgress, SortState::default());
//! assert_eq!(in_progress.len(), 1);
//! # Ok::<(), taskboard_core::TaskboardError>(())
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod preferences;
pub mod storage;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, LocalDateTime, OperationStatus, Tasks, UpdateResult};
pub use error::{Result, TaskboardError};
pub use models::{
    apply_status_change, NewTask, Priority, Task, TaskId, TaskStats, TaskStatus, TaskUpdate,
};
pub use params::{CreateTask, EditTask, Id, ListTasks};
pub use preferences::Preferences;
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use store::{TaskStore, TaskStoreBuilder};
pub use view::{SortDirection, SortKey, SortState, StatusFilter};
