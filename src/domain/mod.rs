//! Domain types for tasklist
//!
//! This module contains the core value types:
//! - Priority: High/Medium/Low with weight, label and persisted ordinal
//! - Task: a named to-do item with a completion flag
//! - SortOrder: the direction-toggleable sort policy
//! - TaskStats: completed/pending counts for display

pub mod priority;
pub mod sort;
pub mod task;

pub use priority::{ParsePriorityError, Priority};
pub use sort::SortOrder;
pub use task::{Task, TaskStats};
