//! Error types for taskmirror
//!
//! Failure taxonomy:
//! - Validation: rejected before any task-store call reaches the wire
//! - Persistence: a task-store call failed; the operation is aborted and
//!   in-memory state stays as it was
//! - Deserialization: local-mirror content missing or unusable; recovered
//!   by substituting the empty state
//!
//! Nothing in this crate is fatal: every failure degrades to the last
//! known good state plus a user-visible notice.

use thiserror::Error;

/// Main error type for taskmirror operations
#[derive(Error, Debug)]
pub enum Error {
    // Rejected before any store call
    #[error("Invalid task: {0}")]
    Validation(String),

    // Task store call failed
    #[error("Task store error: {0}")]
    Persistence(String),

    #[error("Task not found: {0}")]
    TaskNotFound(i64),

    // Local mirror content unusable
    #[error("Unreadable snapshot: {0}")]
    Deserialization(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the failure came from the task store and the operation
    /// was aborted with state unchanged.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Persistence(_) | Error::TaskNotFound(_))
    }
}

/// Result type alias for taskmirror operations
pub type Result<T> = std::result::Result<T, Error>;
