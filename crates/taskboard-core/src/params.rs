//! Parameter structures for taskboard operations
//!
//! These structures carry raw input from an interface layer (the CLI today)
//! into the core without pulling in framework-specific derives. Interface
//! layers define their own argument types and convert into these:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Models → TaskStore
//! ```
//!
//! Enumerated fields are already typed; free-form fields such as due dates
//! stay as strings here and are validated by the `TryFrom` conversions into
//! [`NewTask`] and [`TaskUpdate`].

use jiff::civil::Date;

use crate::{
    error::{Result, TaskboardError},
    models::{NewTask, Priority, TaskId, TaskStatus, TaskUpdate},
    view::{SortDirection, SortKey, SortState, StatusFilter},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default)]
pub struct Id {
    /// The ID of the task to operate on
    pub id: String,
}

impl Id {
    pub fn task_id(&self) -> TaskId {
        TaskId::new(self.id.clone())
    }
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default)]
pub struct CreateTask {
    /// Title of the task (required, not blank)
    pub title: String,
    pub description: Option<String>,
    /// Due date as `YYYY-MM-DD`
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

/// Parameters for editing an existing task. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct EditTask {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Due date as `YYYY-MM-DD`; an empty string clears it
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

impl EditTask {
    pub fn task_id(&self) -> TaskId {
        TaskId::new(self.id.clone())
    }
}

/// Parameters for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct ListTasks {
    pub filter: StatusFilter,
    pub sort: SortKey,
    /// Sort descending instead of ascending
    pub descending: bool,
}

impl ListTasks {
    pub fn sort_state(&self) -> SortState {
        let direction = if self.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortState::new(self.sort, direction)
    }
}

/// Parses a user-supplied due date, rejecting anything but `YYYY-MM-DD`.
pub fn parse_due_date(raw: &str) -> Result<Date> {
    raw.trim().parse::<Date>().map_err(|e| {
        TaskboardError::invalid_input("due_date")
            .with_reason(format!("'{raw}' is not a valid date (expected YYYY-MM-DD): {e}"))
    })
}

impl TryFrom<CreateTask> for NewTask {
    type Error = TaskboardError;

    /// Convert creation parameters into validated task input.
    ///
    /// # Errors
    ///
    /// * `TaskboardError::InvalidInput` - When the title is blank
    /// * `TaskboardError::InvalidInput` - When the due date is not a date
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskboard_core::{models::NewTask, params::CreateTask};
    ///
    /// let params = CreateTask {
    ///     title: "File taxes".to_string(),
    ///     due_date: Some("2025-04-15".to_string()),
    ///     ..Default::default()
    /// };
    /// let input: NewTask = params.try_into()?;
    /// assert_eq!(input.due_date.unwrap().to_string(), "2025-04-15");
    ///
    /// let bad = CreateTask {
    ///     title: "File taxes".to_string(),
    ///     due_date: Some("April 15".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(NewTask::try_from(bad).is_err());
    /// # Ok::<(), taskboard_core::TaskboardError>(())
    /// ```
    fn try_from(params: CreateTask) -> Result<Self> {
        let due_date = match params.due_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_due_date(raw)?),
        };

        let input = NewTask {
            title: params.title,
            description: params.description.unwrap_or_default(),
            due_date,
            priority: params.priority.unwrap_or_default(),
            status: params.status.unwrap_or_default(),
        };
        input.validate()?;
        Ok(input)
    }
}

impl TryFrom<EditTask> for TaskUpdate {
    type Error = TaskboardError;

    fn try_from(params: EditTask) -> Result<Self> {
        let due_date = match params.due_date.as_deref().map(str::trim) {
            None => None,
            Some("") => Some(None),
            Some(raw) => Some(Some(parse_due_date(raw)?)),
        };

        let update = TaskUpdate {
            title: params.title,
            description: params.description,
            due_date,
            priority: params.priority,
            status: params.status,
        };
        update.validate()?;
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_create_defaults() {
        let input = NewTask::try_from(CreateTask {
            title: "Defaults".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(input.priority, Priority::Medium);
        assert_eq!(input.status, TaskStatus::Todo);
        assert_eq!(input.due_date, None);
        assert_eq!(input.description, "");
    }

    #[test]
    fn test_create_blank_due_date_is_absent() {
        let input = NewTask::try_from(CreateTask {
            title: "No date".to_string(),
            due_date: Some("  ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(input.due_date, None);
    }

    #[test]
    fn test_create_rejects_invalid_due_date() {
        let err = NewTask::try_from(CreateTask {
            title: "Bad date".to_string(),
            due_date: Some("2024-02-30".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, TaskboardError::InvalidInput { ref field, .. } if field == "due_date"));
    }

    #[test]
    fn test_create_rejects_blank_title() {
        assert!(NewTask::try_from(CreateTask::default()).is_err());
    }

    #[test]
    fn test_edit_due_date_semantics() {
        let keep = TaskUpdate::try_from(EditTask::default()).unwrap();
        assert_eq!(keep.due_date, None);

        let clear = TaskUpdate::try_from(EditTask {
            due_date: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(clear.due_date, Some(None));

        let set = TaskUpdate::try_from(EditTask {
            due_date: Some("2024-06-01".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(set.due_date, Some(Some(date(2024, 6, 1))));

        assert!(TaskUpdate::try_from(EditTask {
            due_date: Some("tomorrow".to_string()),
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn test_list_sort_state() {
        let params = ListTasks {
            sort: SortKey::Title,
            descending: true,
            ..Default::default()
        };
        assert_eq!(
            params.sort_state(),
            SortState::new(SortKey::Title, SortDirection::Descending)
        );
        assert_eq!(ListTasks::default().sort_state(), SortState::default());
    }
}
