//! Local mirror port: single-key client-side persistence for the
//! serialized state snapshot.
//!
//! The mirror is the swappable stand-in for browser local storage: one
//! well-known key holding one text blob, read synchronously at startup
//! and overwritten after every mutation. Environments without any such
//! storage plug in [`NullMirror`] and behave as if the blob were absent.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Keyed blob persistence on the client device.
pub trait LocalMirror {
    /// Read the stored blob under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the blob under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory mirror, primarily for tests and short-lived embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryMirror {
    entries: HashMap<String, String>,
}

impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalMirror for MemoryMirror {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed mirror: each key maps to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileMirror {
    dir: PathBuf,
}

impl FileMirror {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl LocalMirror for FileMirror {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Mirror for environments with no client-side storage at all: reads
/// see nothing, writes vanish.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMirror;

impl LocalMirror for NullMirror {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}
