//! taskmirror - Undo/Redo Task State Library
//!
//! This library provides the state core of a task manager with dual
//! persistence: a canonical server-side task store and a client-local
//! mirror snapshot for offline resilience.
//!
//! # Core Concepts
//!
//! - **History Reducer**: pure transition function over whole-list
//!   snapshots, the sole authority on undo/redo behavior
//! - **Task Store**: external durable collaborator owning canonical
//!   task rows and identifiers
//! - **Local Mirror**: single-key client-side persistence seeded at
//!   startup and rewritten after every mutation
//! - **Codec**: textual round trip of the full state with calendar-date
//!   normalization of due dates
//!
//! # Module Organization
//!
//! - `task`: task model, status, drafts and validation
//! - `history`: reducer state, actions, and the `reduce` function
//! - `codec`: encode/decode of state for the mirror
//! - `mirror`: local mirror port and built-in implementations
//! - `store`: task store port and an in-memory implementation
//! - `sync`: controller tying store, reducer, and mirror together
//! - `error`: error types and result alias

pub mod codec;
pub mod error;
pub mod history;
pub mod mirror;
pub mod store;
pub mod sync;
pub mod task;

pub use error::{Error, Result};
pub use history::{reduce, Action, State};
pub use mirror::{FileMirror, LocalMirror, MemoryMirror, NullMirror};
pub use store::{MemoryTaskStore, TaskStore};
pub use sync::{SyncConfig, SyncController, DEFAULT_MIRROR_KEY};
pub use task::{Task, TaskDraft, TaskStatus};
