//! Undo/redo reducer over whole-task-list snapshots.
//!
//! History granularity is the full list, not per-field diffs: every
//! forward mutation (add/update/delete) pushes the current list onto
//! `past` and clears `future`; undo/redo move exactly one snapshot
//! between the stacks and leave the other entries untouched. `SetTasks`
//! is a resynchronization, not a user edit, so it resets history instead
//! of recording a step.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Reducer state: the current list plus the undo/redo stacks.
///
/// `past` is ordered oldest first; `future` soonest-to-redo first.
/// Snapshots are immutable once pushed, so handing one back out as the
/// current list is safe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct State {
    pub tasks: Vec<Task>,
    pub past: Vec<Vec<Task>>,
    pub future: Vec<Vec<Task>>,
}

impl State {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

/// State transitions understood by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the list wholesale (startup/server reconciliation).
    SetTasks(Vec<Task>),
    AddTask(Task),
    UpdateTask(Task),
    DeleteTask(i64),
    Undo,
    Redo,
}

/// Pure state transition. The sole authority on how an action mutates
/// state and how undo/redo behave; callers never touch the stacks
/// directly.
pub fn reduce(state: State, action: Action) -> State {
    match action {
        Action::SetTasks(tasks) => State {
            // The canonical store allows rows without a title; drop them
            // rather than let an unnamed task enter the list.
            tasks: tasks
                .into_iter()
                .filter(|task| !task.title.is_empty())
                .collect(),
            past: Vec::new(),
            future: Vec::new(),
        },
        Action::AddTask(task) => {
            let State { mut tasks, mut past, .. } = state;
            past.push(tasks.clone());
            tasks.push(task);
            State {
                tasks,
                past,
                future: Vec::new(),
            }
        }
        Action::UpdateTask(updated) => {
            let State { mut tasks, mut past, .. } = state;
            past.push(tasks.clone());
            if let Some(slot) = tasks.iter_mut().find(|task| task.id == updated.id) {
                *slot = updated;
            }
            State {
                tasks,
                past,
                future: Vec::new(),
            }
        }
        Action::DeleteTask(id) => {
            let State { mut tasks, mut past, .. } = state;
            // Snapshot even when the id is absent: a delete counts as a
            // history step regardless of what it matched.
            past.push(tasks.clone());
            tasks.retain(|task| task.id != id);
            State {
                tasks,
                past,
                future: Vec::new(),
            }
        }
        Action::Undo => {
            let State {
                tasks,
                mut past,
                mut future,
            } = state;
            match past.pop() {
                Some(previous) => {
                    future.insert(0, tasks);
                    State {
                        tasks: previous,
                        past,
                        future,
                    }
                }
                None => State { tasks, past, future },
            }
        }
        Action::Redo => {
            let State {
                tasks,
                mut past,
                mut future,
            } = state;
            if future.is_empty() {
                return State { tasks, past, future };
            }
            let next = future.remove(0);
            past.push(tasks);
            State {
                tasks: next,
                past,
                future,
            }
        }
    }
}
