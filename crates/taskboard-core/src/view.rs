//! Derived task views: status filtering and sorting.
//!
//! Everything here is a pure function of its inputs. Views are recomputed on
//! every read and borrow the collection instead of copying it.
//!
//! ```rust
//! use taskboard_core::{
//!     models::{NewTask, Priority},
//!     storage::MemoryStore,
//!     store::TaskStore,
//!     view::{derive, SortKey, SortState, StatusFilter},
//! };
//!
//! let mut store = TaskStore::open(MemoryStore::new());
//! store.add_task(NewTask::new("Low").with_priority(Priority::Low))?;
//! store.add_task(NewTask::new("High").with_priority(Priority::High))?;
//!
//! let sort = SortState::default().toggle(SortKey::Priority).toggle(SortKey::Priority);
//! let view = derive(store.tasks(), StatusFilter::All, sort);
//! assert_eq!(view[0].title, "High");
//! # Ok::<(), taskboard_core::TaskboardError>(())
//! ```

use std::{cmp::Ordering, fmt};

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::models::{Task, TaskStatus};

/// Status-based subset selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Todo,
    InProgress,
    Completed,
}

impl StatusFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Todo => task.status == TaskStatus::Todo,
            StatusFilter::InProgress => task.status == TaskStatus::InProgress,
            StatusFilter::Completed => task.status == TaskStatus::Completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Tasks",
            StatusFilter::Todo => "To Do",
            StatusFilter::InProgress => "In Progress",
            StatusFilter::Completed => "Completed",
        }
    }
}

/// Field used to order the displayed tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    DueDate,
    Priority,
    Title,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort key and direction. Defaults to due date, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Selecting the active key flips the direction; selecting another key
    /// makes it active in ascending order.
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.reversed(),
            }
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }

    /// Total order between two tasks under this sort.
    ///
    /// Tasks without a due date sort after dated ones in both directions.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self.key {
            SortKey::Priority => self.direction.apply(a.priority.rank().cmp(&b.priority.rank())),
            SortKey::Status => self.direction.apply(a.status.rank().cmp(&b.status.rank())),
            SortKey::Title => self.direction.apply(locale_compare(&a.title, &b.title)),
            SortKey::DueDate => match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => self.direction.apply(x.cmp(&y)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            SortKey::DueDate => "due date",
            SortKey::Priority => "priority",
            SortKey::Title => "title",
            SortKey::Status => "status",
        };
        let arrow = match self.direction {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        };
        write!(f, "{key} {arrow}")
    }
}

/// Locale-style ordering for titles.
///
/// Titles compare by base letters first, ignoring accents and case. Ties are
/// broken by accents (unaccented first) and then by case (lowercase first).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| {
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Filters then stably sorts `tasks`; ties keep collection order.
pub fn derive(tasks: &[Task], filter: StatusFilter, sort: SortState) -> Vec<&Task> {
    let mut view: Vec<&Task> = tasks.iter().filter(|task| filter.matches(task)).collect();
    view.sort_by(|a, b| sort.compare(a, b));
    view
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::{NewTask, Priority, TaskId};

    fn task(id: &str, input: NewTask) -> Task {
        Task::new(
            TaskId::new(id),
            input,
            Timestamp::from_second(1640995200).unwrap(),
        )
    }

    fn titles<'a>(view: &[&'a Task]) -> Vec<&'a str> {
        view.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_filter_all_is_identity() {
        let tasks = vec![
            task("1", NewTask::new("a")),
            task("2", NewTask::new("b").with_status(TaskStatus::Completed)),
        ];
        let view: Vec<&Task> = tasks.iter().filter(|t| StatusFilter::All.matches(t)).collect();
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_filter_completed_keeps_relative_order() {
        let tasks = vec![
            task("1", NewTask::new("one")),
            task("2", NewTask::new("two").with_status(TaskStatus::Completed)),
            task("3", NewTask::new("three").with_status(TaskStatus::InProgress)),
            task("4", NewTask::new("four").with_status(TaskStatus::Completed)),
            task("5", NewTask::new("five")),
        ];
        // Title sort would reorder them; priority ties keep collection order.
        let sort = SortState::new(SortKey::Priority, SortDirection::Ascending);
        let view = derive(&tasks, StatusFilter::Completed, sort);
        assert_eq!(titles(&view), ["two", "four"]);
        assert_eq!(derive(&tasks, StatusFilter::Todo, sort).len(), 2);
        assert_eq!(derive(&tasks, StatusFilter::InProgress, sort).len(), 1);
    }

    #[test]
    fn test_due_date_sort_places_undated_last_both_ways() {
        let tasks = vec![
            task("1", NewTask::new("undated")),
            task("2", NewTask::new("june").with_due_date(date(2024, 6, 1))),
            task("3", NewTask::new("january").with_due_date(date(2024, 1, 1))),
        ];

        let ascending = SortState::default();
        assert_eq!(
            titles(&derive(&tasks, StatusFilter::All, ascending)),
            ["january", "june", "undated"]
        );

        let descending = ascending.toggle(SortKey::DueDate);
        assert_eq!(descending.direction, SortDirection::Descending);
        assert_eq!(
            titles(&derive(&tasks, StatusFilter::All, descending)),
            ["june", "january", "undated"]
        );
    }

    #[test]
    fn test_undated_tasks_compare_equal() {
        let tasks = vec![
            task("1", NewTask::new("first")),
            task("2", NewTask::new("second")),
        ];
        let view = derive(&tasks, StatusFilter::All, SortState::default());
        assert_eq!(titles(&view), ["first", "second"]);
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let tasks = vec![
            task("1", NewTask::new("high").with_priority(Priority::High)),
            task("2", NewTask::new("medium-a")),
            task("3", NewTask::new("low").with_priority(Priority::Low)),
            task("4", NewTask::new("medium-b")),
        ];
        let sort = SortState::new(SortKey::Priority, SortDirection::Ascending);
        assert_eq!(
            titles(&derive(&tasks, StatusFilter::All, sort)),
            ["low", "medium-a", "medium-b", "high"]
        );

        let sort = sort.toggle(SortKey::Priority);
        assert_eq!(
            titles(&derive(&tasks, StatusFilter::All, sort)),
            ["high", "medium-a", "medium-b", "low"]
        );
    }

    #[test]
    fn test_status_sort() {
        let tasks = vec![
            task("1", NewTask::new("done").with_status(TaskStatus::Completed)),
            task("2", NewTask::new("todo")),
            task("3", NewTask::new("doing").with_status(TaskStatus::InProgress)),
        ];
        let sort = SortState::new(SortKey::Status, SortDirection::Ascending);
        assert_eq!(
            titles(&derive(&tasks, StatusFilter::All, sort)),
            ["todo", "doing", "done"]
        );
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let tasks = vec![
            task("1", NewTask::new("banana")),
            task("2", NewTask::new("Apple")),
            task("3", NewTask::new("cherry")),
            task("4", NewTask::new("apple")),
        ];
        let sort = SortState::new(SortKey::Title, SortDirection::Ascending);
        assert_eq!(
            titles(&derive(&tasks, StatusFilter::All, sort)),
            ["apple", "Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("a", "B"), Ordering::Less);
        assert_eq!(locale_compare("Zoo", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_accented_titles() {
        assert_eq!(locale_compare("Éclair", "zebra"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "resumes"), Ordering::Less);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("éclair", "Éclair"), Ordering::Less);
        assert_eq!(locale_compare("Ölfarbe", "Ofen"), Ordering::Greater);
    }

    #[test]
    fn test_title_sort_with_accents() {
        let tasks = vec![
            task("1", NewTask::new("zucchini")),
            task("2", NewTask::new("Éclair")),
            task("3", NewTask::new("dough")),
        ];
        let sort = SortState::new(SortKey::Title, SortDirection::Ascending);
        assert_eq!(
            titles(&derive(&tasks, StatusFilter::All, sort)),
            ["dough", "Éclair", "zucchini"]
        );
    }

    #[test]
    fn test_toggle_new_key_resets_to_ascending() {
        let state = SortState::new(SortKey::Title, SortDirection::Descending);
        let toggled = state.toggle(SortKey::Priority);
        assert_eq!(toggled, SortState::new(SortKey::Priority, SortDirection::Ascending));
        assert_eq!(
            toggled.toggle(SortKey::Priority).direction,
            SortDirection::Descending
        );
    }

    #[test]
    fn test_sort_state_display() {
        assert_eq!(SortState::default().to_string(), "due date ↑");
    }
}
