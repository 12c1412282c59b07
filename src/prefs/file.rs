//! JSON file preferences backend.
//!
//! Stores all preferences as one JSON object on disk, cached in memory.
//! Every set rewrites the whole file.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use super::{PrefValue, Preferences};
use crate::error::Result;

/// File-backed preferences
#[derive(Debug)]
pub struct FilePreferences {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory copy of the file
    cache: RwLock<HashMap<String, PrefValue>>,
}

impl FilePreferences {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store; it is created on first write. A file
    /// that does not parse is logged and treated as empty.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if tokio::fs::try_exists(&path).await? {
            let content = tokio::fs::read_to_string(&path).await?;
            match serde_json::from_str::<HashMap<String, PrefValue>>(&content) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("Ignoring unreadable preferences file {}: {}", path.display(), e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn set(&self, key: &str, value: PrefValue) -> Result<()> {
        let mut cache = self.cache.write().await;
        let mut updated = cache.clone();
        updated.insert(key.to_string(), value);
        let content = serde_json::to_string_pretty(&updated)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, content).await?;

        // Only what reached disk is visible to readers
        *cache = updated;
        Ok(())
    }
}

#[async_trait]
impl Preferences for FilePreferences {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let cache = self.cache.read().await;
        Ok(cache.get(key).and_then(|v| v.as_string()).map(str::to_string))
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, PrefValue::String(value.to_string())).await
    }

    async fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        let cache = self.cache.read().await;
        Ok(cache.get(key).and_then(|v| v.as_bool()))
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set(key, PrefValue::Bool(value)).await
    }
}
