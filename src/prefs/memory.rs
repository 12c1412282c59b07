//! In-memory preferences backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use super::{PrefValue, Preferences};
use crate::error::{Result, TaskListError};

/// Process-local preferences.
///
/// Counts successful writes so callers can assert whether a mutation reached
/// the store. A failing instance rejects every write.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, PrefValue>>,
    writes: AtomicUsize,
    fail_writes: bool,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail. Reads still work.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Seed a string value without counting it as a write
    pub fn with_string(mut self, key: &str, value: &str) -> Self {
        self.values
            .get_mut()
            .insert(key.to_string(), PrefValue::String(value.to_string()));
        self
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    async fn set(&self, key: &str, value: PrefValue) -> Result<()> {
        if self.fail_writes {
            return Err(TaskListError::Storage(format!("write rejected for key '{}'", key)));
        }
        self.values.write().await.insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl Preferences for MemoryPreferences {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().await;
        Ok(values.get(key).and_then(|v| v.as_string()).map(str::to_string))
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, PrefValue::String(value.to_string())).await
    }

    async fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        let values = self.values.read().await;
        Ok(values.get(key).and_then(|v| v.as_bool()))
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set(key, PrefValue::Bool(value)).await
    }
}
