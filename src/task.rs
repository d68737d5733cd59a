//! Task data structure and related functionality.
//!
//! This module defines the core `Task` struct representing a single to-do
//! item, plus the id and timestamp generators every mutation path uses.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item.
///
/// Field names serialize in camelCase so the persisted file, the export file
/// and the import format are all the same portable JSON shape. An absent
/// `updated_at` is omitted rather than written as `null`: a task that has
/// never been edited or toggled carries no update timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Task {
    /// Create a new incomplete task. `text` must already be trimmed and
    /// non-empty; the store enforces that before calling.
    pub fn new(text: String) -> Self {
        Task {
            id: new_id(),
            text,
            completed: false,
            created_at: now_iso(),
            updated_at: None,
        }
    }
}

/// Generate a fresh collision-free task id (random v4 UUID).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC time as an RFC 3339 string with millisecond precision,
/// e.g. `2026-08-06T09:41:22.513Z`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_incomplete_and_unedited() {
        let task = Task::new("Buy milk".into());
        assert!(!task.completed);
        assert!(task.updated_at.is_none());
        assert!(!task.id.is_empty());
        assert!(!task.created_at.is_empty());
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }

    #[test]
    fn absent_updated_at_is_omitted_from_json() {
        let task = Task::new("Buy milk".into());
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("updatedAt"));
        assert!(json.contains("createdAt"));
    }

    #[test]
    fn deserializes_minimal_record() {
        let task: Task = serde_json::from_str(
            r#"{"id":"t1","text":"A","createdAt":"2026-01-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert!(!task.completed);
        assert!(task.updated_at.is_none());
    }
}
