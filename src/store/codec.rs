//! Persisted encoding of the task list.
//!
//! The list is stored as a JSON array of objects with exactly three fields:
//! `name` (string), `completed` (bool) and `priority` (ordinal, 0=High,
//! 1=Medium, 2=Low). Decoding is tolerant per field but strict about shape:
//! missing or null fields take defaults, while a payload that is not an array
//! of objects is reported as a fallback instead of an error.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::domain::{Priority, Task};
use crate::error::Result;

/// Key the task list is stored under
pub const TASKS_KEY: &str = "tasks";

/// Wire form of a task, as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    pub completed: bool,
    pub priority: u8,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            completed: task.completed,
            priority: task.priority.ordinal(),
        }
    }
}

/// Wire form of a task, as read back. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoredRecord {
    pub name: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Number>,
}

impl From<StoredRecord> for Task {
    fn from(record: StoredRecord) -> Self {
        Task {
            name: record.name.unwrap_or_default(),
            completed: record.completed.unwrap_or(false),
            priority: record
                .priority
                .as_ref()
                .map(priority_from_number)
                .unwrap_or_default(),
        }
    }
}

/// Only JSON integers are ordinals. Integers outside 0..=2 (including ones
/// too large for i64) and any float, whole or not, decode as Medium.
fn priority_from_number(number: &Number) -> Priority {
    number.as_i64().map(Priority::from_ordinal).unwrap_or_default()
}

/// Result of decoding a persisted payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Payload parsed; records decoded with per-field defaults
    Tasks(Vec<Task>),
    /// Payload was structurally malformed; the list resets to empty
    Fallback { reason: String },
}

impl Decoded {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Decoded::Fallback { .. })
    }

    /// The decoded tasks, or an empty list on the fallback path
    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            Decoded::Tasks(tasks) => tasks,
            Decoded::Fallback { .. } => Vec::new(),
        }
    }
}

/// Encode the full list in its current order.
pub fn encode_tasks(tasks: &[Task]) -> Result<String> {
    let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Decode a persisted payload. Never fails; see `Decoded`.
pub fn decode_tasks(payload: &str) -> Decoded {
    match serde_json::from_str::<Vec<StoredRecord>>(payload) {
        Ok(records) => Decoded::Tasks(records.into_iter().map(Task::from).collect()),
        Err(e) => Decoded::Fallback { reason: e.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_field_names_and_ordinals() {
        let task = Task::new("Buy milk", Priority::Low).completed();
        let json = serde_json::to_value(TaskRecord::from(&task)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Buy milk", "completed": true, "priority": 2})
        );
    }

    #[test]
    fn test_roundtrip_preserves_order_and_fields() {
        let tasks = vec![
            Task::new("a", Priority::High),
            Task::new("B", Priority::Medium).completed(),
            Task::new("c", Priority::Low),
        ];
        let payload = encode_tasks(&tasks).unwrap();
        assert_eq!(decode_tasks(&payload), Decoded::Tasks(tasks));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let record: StoredRecord = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(Task::from(record), Task::new("x", Priority::Medium));
    }

    #[test]
    fn test_empty_object_decodes_to_blank_task() {
        let decoded = decode_tasks("[{}]");
        assert_eq!(decoded, Decoded::Tasks(vec![Task::default()]));
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let decoded = decode_tasks(r#"[{"name":null,"completed":null,"priority":null}]"#);
        assert_eq!(decoded, Decoded::Tasks(vec![Task::default()]));
    }

    #[test]
    fn test_out_of_range_priority_is_medium() {
        let decoded = decode_tasks(r#"[{"name":"a","priority":9},{"name":"b","priority":-1}]"#);
        let tasks = decoded.into_tasks();
        assert!(tasks.iter().all(|t| t.priority == Priority::Medium));
    }

    #[test]
    fn test_priority_beyond_i64_keeps_other_tasks() {
        let decoded = decode_tasks(
            r#"[{"name":"keep me","priority":0},{"name":"x","priority":18446744073709551615}]"#,
        );
        assert_eq!(
            decoded,
            Decoded::Tasks(vec![
                Task::new("keep me", Priority::High),
                Task::new("x", Priority::Medium),
            ])
        );
    }

    #[test]
    fn test_float_priority_is_medium() {
        let decoded = decode_tasks(
            r#"[{"name":"a","priority":0.0},{"name":"b","priority":1e3},{"name":"c","priority":2.5}]"#,
        );
        assert!(!decoded.is_fallback());
        let tasks = decoded.into_tasks();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| t.priority == Priority::Medium));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let decoded = decode_tasks(r#"[{"name":"a","completed":true,"priority":0,"id":7}]"#);
        assert_eq!(
            decoded,
            Decoded::Tasks(vec![Task::new("a", Priority::High).completed()])
        );
    }

    #[test]
    fn test_non_array_payload_falls_back() {
        for payload in ["42", "\"tasks\"", "{\"name\":\"x\"}", "not json", ""] {
            let decoded = decode_tasks(payload);
            assert!(decoded.is_fallback(), "expected fallback for {payload:?}");
            assert!(decoded.into_tasks().is_empty());
        }
    }

    #[test]
    fn test_non_object_element_falls_back() {
        assert!(decode_tasks("[1, 2]").is_fallback());
    }

    #[test]
    fn test_wrong_field_type_falls_back() {
        assert!(decode_tasks(r#"[{"name":5}]"#).is_fallback());
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(decode_tasks("[]"), Decoded::Tasks(vec![]));
    }
}
