//! Collection wrapper types for displaying groups of tasks.

use std::fmt;

use super::models::TaskLine;
use crate::models::Task;

/// Newtype wrapper for displaying a derived task view.
///
/// Holds borrowed tasks so a filtered and sorted view from
/// [`crate::view::derive`] can be rendered without cloning.
///
/// # Examples
///
/// ```rust
/// use taskboard_core::{
///     display::Tasks,
///     models::{NewTask, Task, TaskId},
/// };
/// use jiff::Timestamp;
///
/// let task = Task::new(TaskId::new("1"), NewTask::new("Example"), Timestamp::now());
/// let output = Tasks(vec![&task]).to_string();
/// assert!(output.contains("**Example**"));
/// assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
/// ```
pub struct Tasks<'a>(pub Vec<&'a Task>);

impl<'a> Tasks<'a> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> fmt::Display for Tasks<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{}", TaskLine(task))?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{NewTask, TaskId};

    #[test]
    fn test_tasks_display_one_line_each() {
        let created = Timestamp::from_second(1640995200).unwrap();
        let first = Task::new(TaskId::new("1"), NewTask::new("First"), created);
        let second = Task::new(TaskId::new("2"), NewTask::new("Second"), created);

        let tasks = Tasks(vec![&first, &second]);
        assert_eq!(tasks.len(), 2);

        let output = tasks.to_string();
        assert_eq!(output.lines().count(), 2);
        assert!(output.lines().next().unwrap().contains("First"));
    }

    #[test]
    fn test_empty_tasks_display() {
        let tasks = Tasks(Vec::new());
        assert!(tasks.is_empty());
        assert_eq!(tasks.to_string(), "No tasks found.\n");
    }
}
