//! The task store: canonical in-memory collection plus write-through
//! persistence.
//!
//! The store is the only mutable state holder. Every public operation
//! commits the new in-memory state first and then writes through the
//! injected [`Storage`] port. A failed write comes back as an error, but the
//! in-memory collection keeps the committed change: memory is the durable
//! intent, storage is the copy.
//!
//! Operations on an unknown id and blank add/edit inputs are silent no-ops
//! and perform no persistence write.

use serde_json::Value;

use crate::edit::{EditOutcome, EditState};
use crate::error::{Error, Result};
use crate::merge;
use crate::storage::Storage;
use crate::task::{now_iso, Task};

/// Owns the ordered task collection. Newest tasks sit at the front.
#[derive(Debug)]
pub struct TaskStore<S: Storage> {
    tasks: Vec<Task>,
    storage: S,
}

/// What an import did, for reporting to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records that normalized into tasks.
    pub added: usize,
    /// Records dropped during normalization.
    pub dropped: usize,
}

impl<S: Storage> TaskStore<S> {
    /// Load the collection from storage. Absent or corrupt data starts the
    /// store empty; this never fails.
    pub fn load(storage: S) -> Self {
        let tasks = storage.load();
        TaskStore { tasks, storage }
    }

    /// Create a task from `raw` and prepend it.
    ///
    /// Input that trims to empty is a no-op and returns `None` without
    /// touching storage.
    pub fn add(&mut self, raw: &str) -> Result<Option<&Task>> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(None);
        }
        self.tasks.insert(0, Task::new(text.to_string()));
        self.persist()?;
        Ok(self.tasks.first())
    }

    /// Replace a task's text via the edit lifecycle.
    ///
    /// Returns `false` without touching anything when the id is unknown or
    /// the submitted text trims to empty (an empty submission cancels the
    /// edit and the task keeps its current text).
    pub fn edit(&mut self, id: &str, raw: &str) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        let mut session = EditState::begin(&task.text);
        session.update_draft(raw);
        match session.submit() {
            EditOutcome::Committed(text) => {
                task.text = text;
                task.updated_at = Some(now_iso());
                self.persist()?;
                Ok(true)
            }
            EditOutcome::Cancelled => Ok(false),
        }
    }

    /// Flip a task's completion flag. Unknown ids are a no-op.
    pub fn toggle_complete(&mut self, id: &str) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        task.updated_at = Some(now_iso());
        self.persist()?;
        Ok(true)
    }

    /// Remove a task by id. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove every completed task, returning how many went away.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        self.persist()?;
        Ok(removed)
    }

    /// Merge an exported/hand-written JSON document into the collection.
    ///
    /// The document must be a top-level array; anything else is rejected
    /// with [`Error::ImportFormat`] and the collection stays untouched. The
    /// merge replaces the collection in one step, so a failure never leaves
    /// a partial import behind.
    pub fn import(&mut self, json: &str) -> Result<ImportSummary> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::import_format(format!("not valid JSON: {e}")))?;
        let Value::Array(records) = value else {
            return Err(Error::import_format(
                "expected a top-level JSON array of tasks",
            ));
        };

        let now = now_iso();
        let merged = merge::merge(&self.tasks, &records, &now);
        let added = merged.len() - self.tasks.len();
        let dropped = records.len() - added;
        self.tasks = merged;
        self.persist()?;
        log::info!("import merged {added} task(s), dropped {dropped} record(s)");
        Ok(ImportSummary { added, dropped })
    }

    /// The current ordered collection.
    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(&self.tasks)
    }
}
