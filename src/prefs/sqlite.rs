//! SQLite preferences backend.
//!
//! One `preferences` table keyed by preference name. Values are stored as
//! their JSON encoding so string and bool slots share a column.

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Mutex;

use super::{PrefValue, Preferences};
use crate::error::{Result, TaskListError};

/// SQLite-backed preferences.
///
/// `rusqlite::Connection` isn't Sync, so it lives behind a `Mutex`. Every
/// operation is a single-row statement.
pub struct SqlitePreferences {
    db: Mutex<Connection>,
}

impl std::fmt::Debug for SqlitePreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlitePreferences").finish_non_exhaustive()
    }
}

impl SqlitePreferences {
    /// Open or create the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Connection::open(path)?;
        Self::init_schema(&db)?;
        Ok(Self { db: Mutex::new(db) })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let db = Connection::open_in_memory()?;
        Self::init_schema(&db)?;
        Ok(Self { db: Mutex::new(db) })
    }

    fn init_schema(db: &Connection) -> Result<()> {
        db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<PrefValue>> {
        let db = self.db.lock().map_err(|e| TaskListError::Storage(e.to_string()))?;
        let raw: Option<String> = db
            .query_row("SELECT value FROM preferences WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            Some(json) => match serde_json::from_str(&json) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    log::warn!("Ignoring unreadable preference '{}': {}", key, e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn write(&self, key: &str, value: &PrefValue) -> Result<()> {
        let json = serde_json::to_string(value)?;
        let db = self.db.lock().map_err(|e| TaskListError::Storage(e.to_string()))?;
        db.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
            params![key, json],
        )?;
        Ok(())
    }
}

#[async_trait]
impl Preferences for SqlitePreferences {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read(key)?.and_then(|v| v.as_string().map(str::to_string)))
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.write(key, &PrefValue::String(value.to_string()))
    }

    async fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.read(key)?.and_then(|v| v.as_bool()))
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.write(key, &PrefValue::Bool(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_and_get() {
        let prefs = SqlitePreferences::open_in_memory().unwrap();
        assert_eq!(prefs.get_string("tasks").await.unwrap(), None);

        prefs.set_string("tasks", "[]").await.unwrap();
        prefs.set_bool("dark_mode", true).await.unwrap();

        assert_eq!(prefs.get_string("tasks").await.unwrap(), Some("[]".to_string()));
        assert_eq!(prefs.get_bool("dark_mode").await.unwrap(), Some(true));
    }

    #[tokio::test]
    async fn test_replace_existing_value() {
        let prefs = SqlitePreferences::open_in_memory().unwrap();
        prefs.set_string("tasks", "[]").await.unwrap();
        prefs.set_string("tasks", "[{}]").await.unwrap();
        assert_eq!(prefs.get_string("tasks").await.unwrap(), Some("[{}]".to_string()));
    }

    #[tokio::test]
    async fn test_string_that_looks_like_bool() {
        let prefs = SqlitePreferences::open_in_memory().unwrap();
        prefs.set_string("tasks", "true").await.unwrap();
        assert_eq!(prefs.get_string("tasks").await.unwrap(), Some("true".to_string()));
        assert_eq!(prefs.get_bool("tasks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("prefs.db");
        {
            let prefs = SqlitePreferences::open(&path).unwrap();
            prefs.set_bool("dark_mode", false).await.unwrap();
        }

        let prefs = SqlitePreferences::open(&path).unwrap();
        assert_eq!(prefs.get_bool("dark_mode").await.unwrap(), Some(false));
    }

    #[tokio::test]
    async fn test_corrupt_row_reads_as_absent() {
        let prefs = SqlitePreferences::open_in_memory().unwrap();
        {
            let db = prefs.db.lock().unwrap();
            db.execute(
                "INSERT INTO preferences (key, value) VALUES ('tasks', '{broken')",
                [],
            )
            .unwrap();
        }
        assert_eq!(prefs.get_string("tasks").await.unwrap(), None);
    }
}
