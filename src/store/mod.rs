//! Task list state manager.
//!
//! This module owns the task list and its round-trip through the
//! preferences store:
//! - **codec**: JSON encoding with tolerant, never-failing decode
//! - **writer**: single in-flight, latest-wins background writes
//! - **task_store**: the list itself, its sort policy and mutators
//!
//! # Example
//!
//! ```ignore
//! use tasklist::domain::Priority;
//! use tasklist::prefs::MemoryPreferences;
//! use tasklist::store::TaskStore;
//! use std::sync::Arc;
//!
//! let mut store = TaskStore::new(Arc::new(MemoryPreferences::new()));
//! store.load().await?;
//! store.add("Buy milk", Priority::High);
//! store.set_completed(0, true)?;
//! store.flush().await?;
//! ```

pub mod codec;
mod task_store;
mod writer;

pub use codec::{Decoded, StoredRecord, TASKS_KEY, TaskRecord, decode_tasks, encode_tasks};
pub use task_store::{AddOutcome, LoadOutcome, TaskStore};
pub use writer::SaveQueue;
