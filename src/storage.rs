//! Durable storage boundary for the task collection.
//!
//! The store talks to storage through the [`Storage`] trait so the same
//! engine runs against a real file, an in-memory double in tests, or any
//! other key-value-ish backend an embedder supplies.
//!
//! Loading is total: a missing file, unreadable bytes, invalid JSON, or a
//! JSON value that is not an array all come back as an empty collection.
//! The canonical data lives in memory; storage is only ever a write-through
//! copy, so recovering from a bad blob loses nothing the process knew about.

use std::cell::{Cell, RefCell};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::task::Task;

/// Fixed, schema-versioned name of the storage entry. Bump the suffix if the
/// persisted shape ever changes incompatibly.
pub const STORAGE_FILE: &str = "tasks-v1.json";

/// Persistence port for the task collection.
pub trait Storage {
    /// Read the persisted collection. Never fails: absent or corrupt data
    /// yields an empty collection.
    fn load(&self) -> Vec<Task>;

    /// Write the collection. Called synchronously after every successful
    /// mutation.
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// File-backed storage: one JSON array per collection.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStorage { path }
    }

    /// Storage under `dir` using the fixed [`STORAGE_FILE`] name.
    pub fn in_dir(dir: &Path) -> Self {
        JsonFileStorage {
            path: dir.join(STORAGE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    "could not read {}, starting with an empty list: {e}",
                    self.path.display()
                );
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!(
                    "invalid task data in {}, starting with an empty list: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        // Atomic-ish write via temp + rename.
        let data = serde_json::to_string_pretty(tasks)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, &self.path)?;
        log::debug!("saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

/// In-memory storage double.
///
/// Holds the same serialized blob a file would, so tests can seed corrupt
/// data, force write failures, and count write-throughs without touching the
/// filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw blob, valid or not.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        MemoryStorage {
            blob: RefCell::new(Some(blob.into())),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail, simulating a full or revoked backing
    /// store.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// The currently persisted blob, if any.
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Vec<Task> {
        match self.blob.borrow().as_deref() {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Task>>(raw) {
                Ok(tasks) => tasks,
                Err(e) => {
                    log::warn!("invalid task data in memory storage, starting empty: {e}");
                    Vec::new()
                }
            },
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        if self.fail_writes.get() {
            return Err(io::Error::new(io::ErrorKind::Other, "storage write refused").into());
        }
        let data = serde_json::to_string_pretty(tasks)?;
        *self.blob.borrow_mut() = Some(data);
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_blob_loads_empty() {
        assert!(MemoryStorage::new().load().is_empty());
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let storage = MemoryStorage::with_blob("not json");
        assert!(storage.load().is_empty());
    }

    #[test]
    fn non_array_blob_loads_empty() {
        let storage = MemoryStorage::with_blob(r#"{"id":"t1","text":"A"}"#);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let storage = MemoryStorage::new();
        let tasks = vec![Task::new("Buy milk".into())];
        storage.save(&tasks).unwrap();
        assert_eq!(storage.load(), tasks);
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn forced_write_failure_keeps_previous_blob() {
        let storage = MemoryStorage::new();
        storage.save(&[Task::new("kept".into())]).unwrap();
        storage.fail_writes(true);
        assert!(storage.save(&[]).is_err());
        assert_eq!(storage.load().len(), 1);
    }
}
