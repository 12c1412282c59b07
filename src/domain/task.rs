//! Task record and list summary types

use super::priority::Priority;

/// A single to-do item.
///
/// Tasks have no identity beyond their position in the list; sorting moves
/// them but never changes their content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub completed: bool,
    pub priority: Priority,
}

impl Task {
    /// Create an incomplete task
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            completed: false,
            priority,
        }
    }

    /// Mark the task complete (builder style, used mostly by tests)
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new(String::new(), Priority::default())
    }
}

/// Completion counts for a task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    /// Count completed and pending tasks
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
        }
    }
}
