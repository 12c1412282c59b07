//! Sort policy for the task list.
//!
//! Tasks sort by priority weight first, in the direction of the current
//! `SortOrder`. Ties fall back to the task name compared case-insensitively,
//! always ascending; the toggle never reverses the tie-break.

use super::task::Task;
use std::cmp::Ordering;

/// Direction of the primary (priority) sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// High -> Low
    #[default]
    Descending,
    /// Low -> High
    Ascending,
}

impl SortOrder {
    /// Flip the direction.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Descending => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
        }
    }

    pub fn is_descending(self) -> bool {
        self == SortOrder::Descending
    }

    /// Compare two tasks under this order.
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        let by_weight = match self {
            SortOrder::Descending => b.priority.weight().cmp(&a.priority.weight()),
            SortOrder::Ascending => a.priority.weight().cmp(&b.priority.weight()),
        };
        by_weight.then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    }

    /// Stable in-place sort.
    pub fn sort(self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}
