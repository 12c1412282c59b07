//! tasklist - a priority-sorted to-do list
//!
//! Tasks carry a name, a completion flag and a priority. The list is kept
//! sorted by priority (direction toggleable) with a case-insensitive name
//! tie-break, and is persisted as JSON through a small async key-value
//! preferences store alongside a light/dark theme flag.

pub mod domain;
pub mod error;
pub mod prefs;
pub mod store;
pub mod theme;

pub use error::{Result, TaskListError};
