//! Synchronization controller: orchestrates the task store, the history
//! reducer, and the local mirror.
//!
//! Every user-facing mutation goes store-first: the reducer sees an
//! action only after the store call succeeds, so a rejected call leaves
//! local state exactly as it was. Undo and redo never round-trip to the
//! store; the server keeps its post-edit rows until the next forward
//! mutation overwrites them. After every dispatch that changes state,
//! the full state is encoded and written to the mirror under one
//! well-known key.

use tracing::{debug, warn};

use crate::codec;
use crate::error::Result;
use crate::history::{reduce, Action, State};
use crate::mirror::LocalMirror;
use crate::store::TaskStore;
use crate::task::{Task, TaskDraft};

/// Mirror key used by the original browser client.
pub const DEFAULT_MIRROR_KEY: &str = "taskState";

/// Controller configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Key the serialized state is mirrored under.
    pub mirror_key: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            mirror_key: DEFAULT_MIRROR_KEY.to_string(),
        }
    }
}

/// Owner of the reducer state and the only path that mutates it.
///
/// All methods run on one logical thread of control; store calls suspend
/// only the initiating operation, and dispatch is never reentered
/// mid-mutation.
pub struct SyncController<S, M> {
    store: S,
    mirror: M,
    config: SyncConfig,
    state: State,
}

impl<S: TaskStore, M: LocalMirror> SyncController<S, M> {
    /// Seed state synchronously from the mirror; absent or unreadable
    /// content yields the empty state.
    pub fn new(store: S, mirror: M, config: SyncConfig) -> Self {
        let state = codec::decode(mirror.get(&config.mirror_key).as_deref());
        Self {
            store,
            mirror,
            config,
            state,
        }
    }

    pub fn with_defaults(store: S, mirror: M) -> Self {
        Self::new(store, mirror, SyncConfig::default())
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    /// Fetch the canonical list and overwrite local state wholesale.
    ///
    /// Resynchronization, not an edit: history is reset, and local edits
    /// made while the fetch was in flight are discarded. A failure is
    /// non-fatal; the locally seeded state stays intact and the error
    /// comes back as a notice for the caller to show.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.store.list().await {
            Ok(tasks) => {
                self.dispatch(Action::SetTasks(tasks));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "task store list failed; keeping local state");
                Err(err)
            }
        }
    }

    /// Create a task. The reducer only ever sees the store's returned
    /// row, which carries the server-assigned identifier.
    pub async fn add(&mut self, draft: TaskDraft) -> Result<Task> {
        draft.validate()?;
        let task = match self.store.create(draft).await {
            Ok(task) => task,
            Err(err) => {
                warn!(error = %err, "task store create failed");
                return Err(err);
            }
        };
        self.dispatch(Action::AddTask(task.clone()));
        Ok(task)
    }

    /// Edit a task, store first.
    pub async fn update(&mut self, task: Task) -> Result<Task> {
        TaskDraft::new(task.title.clone(), task.description.clone(), task.due_date)
            .validate()?;
        if let Err(err) = self.store.update(task.clone()).await {
            warn!(error = %err, id = task.id, "task store update failed");
            return Err(err);
        }
        self.dispatch(Action::UpdateTask(task.clone()));
        Ok(task)
    }

    /// Delete a task, store first.
    pub async fn delete(&mut self, id: i64) -> Result<Task> {
        let deleted = match self.store.delete(id).await {
            Ok(deleted) => deleted,
            Err(err) => {
                warn!(error = %err, id, "task store delete failed");
                return Err(err);
            }
        };
        self.dispatch(Action::DeleteTask(id));
        Ok(deleted)
    }

    /// Step back one snapshot. Purely local; the store is not consulted.
    pub fn undo(&mut self) {
        self.dispatch(Action::Undo);
    }

    /// Step forward one snapshot. Purely local.
    pub fn redo(&mut self) {
        self.dispatch(Action::Redo);
    }

    fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        let next = reduce(self.state.clone(), action);
        if next == self.state {
            return;
        }
        self.state = next;
        self.persist();
    }

    // Mirror writes are best-effort: a failed write must not undo a
    // mutation the store has already accepted.
    fn persist(&mut self) {
        match codec::encode(&self.state) {
            Ok(blob) => {
                if let Err(err) = self.mirror.set(&self.config.mirror_key, &blob) {
                    warn!(error = %err, "local mirror write failed");
                }
            }
            Err(err) => warn!(error = %err, "state encoding failed; mirror not updated"),
        }
    }
}
