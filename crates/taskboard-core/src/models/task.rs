//! Task model definition and the status transition it obeys.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use super::{NewTask, Priority, TaskStatus};

/// Opaque, immutable task identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single to-do item.
///
/// Fields are public for reading and for building fixtures. Mutations that
/// touch `status` must go through [`apply_status_change`] so that
/// `completed` and `completed_at` stay consistent with it; the
/// [`TaskStore`](crate::store::TaskStore) does this for every update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned at creation
    pub id: TaskId,

    /// Short summary; never blank
    pub title: String,

    /// Free-form details, empty when not provided
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,

    /// Optional calendar due date
    #[serde(default, deserialize_with = "deserialize_due_date")]
    pub due_date: Option<Date>,

    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub priority: Priority,

    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub status: TaskStatus,

    /// Mirrors `status == TaskStatus::Completed`
    #[serde(default)]
    pub completed: bool,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the most recent transition into `Completed`
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
}

impl Task {
    /// Builds a fully formed task from creation input.
    ///
    /// A task created directly in the `Completed` state counts as having
    /// transitioned into it at `now`.
    pub fn new(id: TaskId, input: NewTask, now: Timestamp) -> Self {
        let completed = input.status == TaskStatus::Completed;
        Self {
            id,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            priority: input.priority,
            status: input.status,
            completed,
            created_at: now,
            completed_at: completed.then_some(now),
        }
    }
}

/// Moves a task to `status`, keeping the derived completion fields in step.
///
/// Entering `Completed` stamps `completed_at` with `now`; leaving it clears
/// the stamp. Re-applying the current status is not a transition and keeps
/// the existing `completed_at`.
pub fn apply_status_change(mut task: Task, status: TaskStatus, now: Timestamp) -> Task {
    let completed = status == TaskStatus::Completed;
    if task.status != status {
        task.status = status;
        task.completed_at = completed.then_some(now);
    }
    task.completed = completed;
    task
}

/// Parses a persisted due date leniently.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (whose UTC date is used).
/// Blank strings and anything else yield `None`.
pub fn parse_due_date_lenient(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = raw.parse::<Date>() {
        return Some(date);
    }
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts.to_zoned(TimeZone::UTC).date());
    }
    warn!("Ignoring unparseable due date {raw:?}");
    None
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => parse_due_date_lenient(&s),
        Some(serde_json::Value::Null) | None => None,
        Some(other) => {
            warn!("Ignoring non-string due date {other}");
            None
        }
    })
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads an enum field, falling back to its default for `null` or values this
/// version does not know.
fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(raw.clone()).unwrap_or_else(|e| {
        warn!("Ignoring unreadable saved value {raw}: {e}");
        T::default()
    }))
}
