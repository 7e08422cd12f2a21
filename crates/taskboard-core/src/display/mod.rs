//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] in [`models`]; this module
//! adds wrappers for collections and operation results so the same task can
//! be rendered differently depending on context (a list line, a full card,
//! a creation confirmation). All output is markdown, rendered by the CLI's
//! terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Task, Stats)   │───▶│ (Tasks, Create- │───▶│     Output      │
//! │                 │    │  Result, ...)   │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Task list wrapper ([`Tasks`])
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Timestamp and due date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use taskboard_core::{
//!     display::CreateResult,
//!     models::{NewTask, Task, TaskId},
//! };
//!
//! let task = Task::new(TaskId::new("42"), NewTask::new("Call mom"), Timestamp::now());
//! let output = CreateResult::new(task).to_string();
//! assert!(output.contains("Created task with ID: 42"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Tasks;
pub use datetime::{DueDate, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
