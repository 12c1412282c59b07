//! Persistence collaborator: a small async key-value preferences store.
//!
//! The task list and the theme flag are the only things persisted. Each lives
//! under its own fixed key. Three backends implement the same trait:
//! - **memory**: process-local, for tests and ephemeral sessions
//! - **file**: a single JSON object file rewritten on every set
//! - **sqlite**: a `preferences` key/value table
//!
//! # Example
//!
//! ```ignore
//! use tasklist::prefs::{BackendKind, open_backend};
//!
//! let prefs = open_backend(BackendKind::File, &data_dir).await?;
//! prefs.set_bool("dark_mode", true).await?;
//! assert_eq!(prefs.get_bool("dark_mode").await?, Some(true));
//! ```

mod file;
mod memory;
mod sqlite;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

pub use file::FilePreferences;
pub use memory::MemoryPreferences;
pub use sqlite::SqlitePreferences;

/// File name used by the JSON file backend inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// File name used by the SQLite backend inside the data directory
pub const PREFERENCES_DB: &str = "preferences.db";

/// Async key-value store with string and bool slots.
///
/// A key holding a value of the other type reads as absent.
#[async_trait]
pub trait Preferences: Send + Sync {
    /// Read a string value
    async fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Write a string value
    async fn set_string(&self, key: &str, value: &str) -> Result<()>;

    /// Read a bool value
    async fn get_bool(&self, key: &str) -> Result<Option<bool>>;

    /// Write a bool value
    async fn set_bool(&self, key: &str, value: bool) -> Result<()>;
}

/// A stored preference value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    String(String),
}

impl PrefValue {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PrefValue::String(s) => Some(s),
            PrefValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrefValue::Bool(b) => Some(*b),
            PrefValue::String(_) => None,
        }
    }
}

/// Which backend to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Memory,
    #[default]
    File,
    Sqlite,
}

/// Open the backend named by `kind` under `data_dir`.
pub async fn open_backend(kind: BackendKind, data_dir: &Path) -> Result<Arc<dyn Preferences>> {
    let prefs: Arc<dyn Preferences> = match kind {
        BackendKind::Memory => Arc::new(MemoryPreferences::new()),
        BackendKind::File => Arc::new(FilePreferences::open(data_dir.join(PREFERENCES_FILE)).await?),
        BackendKind::Sqlite => Arc::new(SqlitePreferences::open(data_dir.join(PREFERENCES_DB))?),
    };
    log::debug!("Opened {:?} preferences backend in {}", kind, data_dir.display());
    Ok(prefs)
}
