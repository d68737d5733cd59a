//! Import-merge algorithm.
//!
//! Imported files come from outside the process, so every record is treated
//! as an untyped JSON mapping and pushed through an explicit normalization
//! step before it may join the collection. Normalization is per-record and
//! total: a record either becomes a valid [`Task`] or is dropped with a
//! reason, and one bad record never sinks the rest of the import.
//!
//! The merge itself is pure. Callers validate the top-level shape, pick the
//! merge-time timestamp, and persist the result.

use serde_json::Value;

use crate::task::{new_id, Task};

/// Result of normalizing one imported record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Valid(Task),
    Dropped(DropReason),
}

/// Why a record was dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The record's text coerced to an empty string after trimming.
    EmptyText,
}

/// Normalize one loosely-typed record into a task.
///
/// Coercion rules mirror the import format's loose typing:
/// - `id`: any truthy scalar, stringified; falsy or absent mints a fresh id.
/// - `text`: scalars stringify, everything else coerces to empty; an empty
///   trimmed text drops the record.
/// - `completed`: truthiness of the value (a non-empty string counts as
///   true, `0` and `""` do not).
/// - `createdAt`: truthy scalar, stringified, else `now`.
/// - `updatedAt`: truthy scalar, stringified, else absent.
pub fn normalize_record(record: &Value, now: &str) -> Normalized {
    let text = coerce_text(record.get("text"));
    let text = text.trim();
    if text.is_empty() {
        return Normalized::Dropped(DropReason::EmptyText);
    }

    let id = record
        .get("id")
        .and_then(coerce_scalar)
        .unwrap_or_else(new_id);
    let completed = record.get("completed").is_some_and(is_truthy);
    let created_at = record
        .get("createdAt")
        .and_then(coerce_scalar)
        .unwrap_or_else(|| now.to_string());
    let updated_at = record.get("updatedAt").and_then(coerce_scalar);

    Normalized::Valid(Task {
        id,
        text: text.to_string(),
        completed,
        created_at,
        updated_at,
    })
}

/// Merge an imported record list into the current collection.
///
/// Surviving records are prepended ahead of `current` in their relative
/// input order, matching where freshly added tasks go. Incoming ids are kept
/// verbatim and are not deduplicated against existing tasks.
pub fn merge(current: &[Task], incoming: &[Value], now: &str) -> Vec<Task> {
    let mut merged: Vec<Task> = incoming
        .iter()
        .filter_map(|record| match normalize_record(record, now) {
            Normalized::Valid(task) => Some(task),
            Normalized::Dropped(reason) => {
                log::debug!("import: dropped record ({reason:?})");
                None
            }
        })
        .collect();
    merged.extend_from_slice(current);
    merged
}

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Stringify a truthy scalar; `None` for anything falsy or non-scalar.
fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: &str = "2026-08-06T12:00:00.000Z";

    #[test]
    fn drops_record_with_blank_text() {
        let record = json!({"text": "   "});
        assert_eq!(
            normalize_record(&record, NOW),
            Normalized::Dropped(DropReason::EmptyText)
        );
    }

    #[test]
    fn drops_record_without_text() {
        assert_eq!(
            normalize_record(&json!({"completed": true}), NOW),
            Normalized::Dropped(DropReason::EmptyText)
        );
        // A non-object record has no text field at all.
        assert_eq!(
            normalize_record(&json!(42), NOW),
            Normalized::Dropped(DropReason::EmptyText)
        );
    }

    #[test]
    fn keeps_provided_id_and_timestamps() {
        let record = json!({
            "id": "abc-123",
            "text": "Ship it",
            "completed": true,
            "createdAt": "2025-01-01T00:00:00.000Z",
            "updatedAt": "2025-06-01T00:00:00.000Z",
        });
        match normalize_record(&record, NOW) {
            Normalized::Valid(task) => {
                assert_eq!(task.id, "abc-123");
                assert!(task.completed);
                assert_eq!(task.created_at, "2025-01-01T00:00:00.000Z");
                assert_eq!(task.updated_at.as_deref(), Some("2025-06-01T00:00:00.000Z"));
            }
            other => panic!("expected valid record, got {other:?}"),
        }
    }

    #[test]
    fn mints_id_and_created_at_when_absent() {
        match normalize_record(&json!({"text": "A"}), NOW) {
            Normalized::Valid(task) => {
                assert!(!task.id.is_empty());
                assert_eq!(task.created_at, NOW);
                assert!(!task.completed);
                assert!(task.updated_at.is_none());
            }
            other => panic!("expected valid record, got {other:?}"),
        }
    }

    #[test]
    fn falsy_id_is_replaced() {
        for record in [json!({"id": "", "text": "A"}), json!({"id": 0, "text": "A"})] {
            match normalize_record(&record, NOW) {
                Normalized::Valid(task) => assert!(!task.id.is_empty() && task.id != "0"),
                other => panic!("expected valid record, got {other:?}"),
            }
        }
    }

    #[test]
    fn completed_follows_truthiness() {
        let truthy = json!({"text": "A", "completed": "yes"});
        let falsy = json!({"text": "A", "completed": 0});
        let absent = json!({"text": "A"});
        assert!(matches!(
            normalize_record(&truthy, NOW),
            Normalized::Valid(Task { completed: true, .. })
        ));
        assert!(matches!(
            normalize_record(&falsy, NOW),
            Normalized::Valid(Task { completed: false, .. })
        ));
        assert!(matches!(
            normalize_record(&absent, NOW),
            Normalized::Valid(Task { completed: false, .. })
        ));
    }

    #[test]
    fn numeric_text_is_stringified() {
        match normalize_record(&json!({"text": 42}), NOW) {
            Normalized::Valid(task) => assert_eq!(task.text, "42"),
            other => panic!("expected valid record, got {other:?}"),
        }
    }

    #[test]
    fn merge_prepends_survivors_in_input_order() {
        let current = vec![Task::new("existing".into())];
        let incoming = vec![
            json!({"text": "A"}),
            json!({"text": ""}),
            json!({"text": "B", "completed": true}),
        ];
        let merged = merge(&current, &incoming, NOW);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].text, "A");
        assert!(!merged[0].completed);
        assert_eq!(merged[1].text, "B");
        assert!(merged[1].completed);
        assert_eq!(merged[2].text, "existing");
    }

    #[test]
    fn merge_into_empty_keeps_only_survivors() {
        let incoming = vec![json!({"text": "A"}), json!({"text": "  "})];
        let merged = merge(&[], &incoming, NOW);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "A");
    }

    #[test]
    fn merge_does_not_dedup_by_id() {
        let mut existing = Task::new("existing".into());
        existing.id = "same-id".into();
        let incoming = vec![json!({"id": "same-id", "text": "imported"})];
        let merged = merge(&[existing], &incoming, NOW);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, merged[1].id);
    }
}
