//! Error types for tasklist
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in the task list library
#[derive(Debug, Error)]
pub enum TaskListError {
    /// Persistence collaborator failed to read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Index-based mutator called with a stale or invalid index
    #[error("Index {index} out of range for {len} tasks")]
    IndexOutOfRange { index: usize, len: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite backend error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type alias for task list operations
pub type Result<T> = std::result::Result<T, TaskListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error() {
        let err = TaskListError::Storage("disk full".to_string());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = TaskListError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Index 4 out of range for 2 tasks");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TaskListError = io_err.into();
        assert!(matches!(err, TaskListError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: TaskListError = json_err.into();
        assert!(matches!(err, TaskListError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(TaskListError::Storage("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
