//! Task store port: the canonical durable record-keeper for tasks.
//!
//! The store owns identifiers and canonical task data; everything local
//! to the client (reducer state, mirror snapshot) is derived from it.
//! The contract mirrors a serial-id table: `create` assigns the next
//! identifier, `list` returns rows ordered by identifier ascending, and
//! `update`/`delete` hand back the affected row.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::task::{Task, TaskDraft};

/// CRUD contract of the canonical task store.
///
/// Calls are asynchronous and may fail; callers treat any failure as a
/// persistence error, abort the operation, and leave local state as it
/// was.
#[async_trait]
pub trait TaskStore {
    /// Insert a new task; the store assigns the identifier.
    async fn create(&mut self, draft: TaskDraft) -> Result<Task>;

    /// Replace the row matching `task.id`.
    async fn update(&mut self, task: Task) -> Result<Task>;

    /// Remove the row with the given identifier, returning it.
    async fn delete(&mut self, id: i64) -> Result<Task>;

    /// All rows, ordered by identifier ascending.
    async fn list(&self) -> Result<Vec<Task>>;
}

/// In-memory store with serial identifiers starting at 1, for tests and
/// embedders without a database backend.
#[derive(Debug, Clone)]
pub struct MemoryTaskStore {
    tasks: Vec<Task>,
    next_id: i64,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of rows currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn create(&mut self, draft: TaskDraft) -> Result<Task> {
        let task = draft.into_task(self.next_id);
        self.next_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&mut self, task: Task) -> Result<Task> {
        let slot = self
            .tasks
            .iter_mut()
            .find(|existing| existing.id == task.id)
            .ok_or(Error::TaskNotFound(task.id))?;
        *slot = task.clone();
        Ok(task)
    }

    async fn delete(&mut self, id: i64) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let mut tasks = self.tasks.clone();
        tasks.sort_by_key(|task| task.id);
        Ok(tasks)
    }
}
