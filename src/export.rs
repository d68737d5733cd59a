//! Export serialization.
//!
//! Produces a pretty-printed JSON array of the whole collection, byte-for-
//! byte loadable by the import path, plus a filesystem-safe filename
//! suggestion carrying the export time.

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::task::Task;

/// Serialize the collection as a pretty-printed JSON array.
///
/// Every field of every task is carried verbatim, so exporting and then
/// importing the file reproduces the same tasks, ids and timestamps
/// included.
pub fn serialize_tasks(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

/// Suggested filename for an export taken at `now`.
///
/// Timestamp separators are replaced with `_`/`-` so the name is valid on
/// every filesystem.
pub fn export_filename(now: DateTime<Local>) -> String {
    format!("tasks_{}.json", now.format("%Y-%m-%d_%H-%M-%S"))
}
