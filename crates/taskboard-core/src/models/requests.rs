//! Request types for creating and updating tasks.

use jiff::{civil::Date, Timestamp};

use super::{apply_status_change, Priority, Task, TaskStatus};
use crate::error::{Result, TaskboardError};

/// Rejects titles that are empty or whitespace-only.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TaskboardError::invalid_input("title").with_reason("Title cannot be blank"));
    }
    Ok(())
}

/// Input for creating a task. Everything except the title has a default.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: Option<Date>,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl NewTask {
    /// Creates input with a title and default values for the other fields.
    ///
    /// ```rust
    /// use taskboard_core::models::{NewTask, Priority, TaskStatus};
    ///
    /// let input = NewTask::new("Write report").with_priority(Priority::High);
    /// assert_eq!(input.status, TaskStatus::Todo);
    /// assert_eq!(input.priority, Priority::High);
    /// assert!(input.description.is_empty());
    /// ```
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority: Priority::default(),
            status: TaskStatus::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due_date(mut self, due_date: Date) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}

/// Typed partial update: only the fields that are `Some` change.
///
/// `due_date` is doubly optional: `Some(None)` clears the date while `None`
/// leaves it alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Option<Date>>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    /// An update that only changes the status.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }

    /// Merges the supplied fields into `task`.
    ///
    /// A supplied status goes through [`apply_status_change`], so callers
    /// never set `completed` or `completed_at` themselves.
    pub fn apply_to(self, mut task: Task, now: Timestamp) -> Task {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        match self.status {
            Some(status) => apply_status_change(task, status, now),
            None => task,
        }
    }
}
