//! Task model shared by the store, the reducer, and the codec.
//!
//! Due dates are calendar dates carried as UTC instants pinned to
//! midnight; the codec re-normalizes them after every decode so a round
//! trip through a timestamp cannot drift the date (see `codec`).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
    InProgress,
}

/// A task as held canonically by the task store.
///
/// The identifier is assigned by the store on creation and immutable
/// afterwards; client code never invents one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
}

impl Task {
    /// Calendar day of the due date, ignoring any time-of-day that crept
    /// in through serialization.
    pub fn due_day(&self) -> NaiveDate {
        self.due_date.date_naive()
    }
}

/// Fields of a task before the store has assigned an identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: TaskStatus::default(),
            due_date,
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Reject drafts the form collaborator should never have submitted.
    /// Runs before any store call.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("task title must not be empty".to_string()));
        }
        Ok(())
    }

    /// Materialize the draft with a store-assigned identifier.
    pub fn into_task(self, id: i64) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            due_date: self.due_date,
        }
    }
}

/// Midnight UTC on the given date.
pub fn due_on(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: TaskStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, TaskStatus::Pending);
    }

    #[test]
    fn draft_defaults_to_pending() {
        let draft = TaskDraft::new("Write report", "", due_on(day(2025, 3, 1)));
        assert_eq!(draft.status, TaskStatus::Pending);
    }

    #[test]
    fn blank_title_fails_validation() {
        let draft = TaskDraft::new("   ", "body", due_on(day(2025, 3, 1)));
        assert!(matches!(draft.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn draft_materializes_with_assigned_id() {
        let draft = TaskDraft::new("Write report", "quarterly", due_on(day(2025, 3, 1)))
            .with_status(TaskStatus::InProgress);
        let task = draft.into_task(7);
        assert_eq!(task.id, 7);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.due_day(), day(2025, 3, 1));
    }
}
