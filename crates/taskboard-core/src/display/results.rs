//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::datetime::DueDate;
use crate::models::Task;

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Tracks the list of changes so users get clear feedback about what was
/// modified.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use taskboard_core::{
///     display::UpdateResult,
///     models::{apply_status_change, NewTask, Task, TaskId, TaskStatus},
/// };
///
/// let before = Task::new(TaskId::new("1"), NewTask::new("Ship it"), Timestamp::now());
/// let after = apply_status_change(before.clone(), TaskStatus::Completed, Timestamp::now());
///
/// let output = UpdateResult::between(&before, after).to_string();
/// assert!(output.contains("- Status: todo → completed"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl UpdateResult<Task> {
    /// Builds the change list by comparing a task before and after an update.
    pub fn between(before: &Task, after: Task) -> Self {
        let mut changes = Vec::new();

        if before.title != after.title {
            changes.push(format!("Title: {} → {}", before.title, after.title));
        }
        if before.description != after.description {
            changes.push("Description updated".to_string());
        }
        if before.due_date != after.due_date {
            let due = match &after.due_date {
                Some(date) => DueDate(date).to_string(),
                None => "none".to_string(),
            };
            changes.push(format!("Due date: {due}"));
        }
        if before.priority != after.priority {
            changes.push(format!("Priority: {} → {}", before.priority, after.priority));
        }
        if before.status != after.status {
            changes.push(format!("Status: {} → {}", before.status, after.status));
        }

        Self::with_changes(after, changes)
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}
