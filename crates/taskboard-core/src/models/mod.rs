//! Data models for tasks.
//!
//! This module contains the task entity, its status and priority enums, the
//! typed creation and partial-update requests, and aggregate counts. Display
//! implementations live in [`crate::display::models`].
//!
//! # Status coupling
//!
//! A task's `completed` flag and `completed_at` stamp are derived from its
//! status. [`apply_status_change`] is the only place that derivation happens;
//! [`TaskUpdate::apply_to`] routes every status change through it.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use taskboard_core::models::{apply_status_change, NewTask, Task, TaskId, TaskStatus};
//!
//! let now = Timestamp::now();
//! let task = Task::new(TaskId::new("1"), NewTask::new("Water plants"), now);
//! assert!(!task.completed);
//!
//! let done = apply_status_change(task, TaskStatus::Completed, now);
//! assert!(done.completed);
//! assert_eq!(done.completed_at, Some(now));
//! ```

pub mod requests;
pub mod stats;
pub mod status;
pub mod task;


pub use requests::{validate_title, NewTask, TaskUpdate};
pub use stats::TaskStats;
pub use status::{Priority, TaskStatus};
pub use task::{apply_status_change, parse_due_date_lenient, Task, TaskId};
