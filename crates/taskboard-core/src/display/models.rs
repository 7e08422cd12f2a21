//! Display implementations for domain models.
//!
//! The full task format is used when a single task is shown on its own; list
//! contexts use the compact [`TaskLine`] wrapper instead.

use std::fmt;

use super::datetime::{DueDate, LocalDateTime};
use crate::models::{Priority, Task, TaskStats, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Priority: {}", self.priority.label())?;
        if let Some(due) = &self.due_date {
            writeln!(f, "- Due: {}", DueDate(due))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        Ok(())
    }
}

/// Single-line rendering of a task for lists.
pub struct TaskLine<'a>(pub &'a Task);

impl<'a> fmt::Display for TaskLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.0;
        let check = if task.completed { "x" } else { " " };
        // Completed titles are struck through, as in the card view.
        let title = if task.completed {
            format!("~~{}~~", task.title)
        } else {
            format!("**{}**", task.title)
        };

        write!(
            f,
            "- [{check}] {title} (ID: {}) · {} · {}",
            task.id,
            task.status.with_icon(),
            task.priority.label()
        )?;
        if let Some(due) = &task.due_date {
            write!(f, " · Due: {}", DueDate(due))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TaskStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Total**: {}", self.total)?;
        writeln!(f, "- **To Do**: {}", self.todo)?;
        writeln!(f, "- **In Progress**: {}", self.in_progress)?;
        writeln!(
            f,
            "- **Completed**: {} ({}%)",
            self.completed,
            self.completion_percent()
        )
    }
}
