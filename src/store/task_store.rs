//! TaskStore: the in-memory task list and its persistence round-trip.
//!
//! The store owns the ordered list of tasks and the current sort order:
//! - **Mutators** update memory, re-sort where the sort key changed, then hand
//!   the encoded list to the `SaveQueue` without waiting for the write
//! - **load** is the only awaited read, done once at startup
//! - **flush** lets a caller that is about to exit wait for pending writes
//!
//! The list is always sorted per the current `SortOrder` after a mutator
//! returns, so indices from the last read stay meaningful until the next
//! mutation.

use std::sync::Arc;

use crate::domain::{Priority, SortOrder, Task, TaskStats};
use crate::error::{Result, TaskListError};
use crate::prefs::Preferences;
use crate::store::codec::{Decoded, TASKS_KEY, decode_tasks, encode_tasks};
use crate::store::writer::SaveQueue;

/// What `load` found in the persistence collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored yet
    Missing,
    /// Stored list decoded with this many tasks
    Loaded(usize),
    /// Stored payload was malformed and the list was reset to empty
    Recovered { reason: String },
}

/// Result of `add`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Task added; `index` is its position after the re-sort
    Added { index: usize },
    /// Name was empty after trimming; nothing changed
    RejectedBlank,
}

/// Owner of the task list.
pub struct TaskStore {
    prefs: Arc<dyn Preferences>,
    writer: SaveQueue,
    tasks: Vec<Task>,
    sort_order: SortOrder,
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("sort_order", &self.sort_order)
            .finish_non_exhaustive()
    }
}

impl TaskStore {
    /// Create an empty store writing through `prefs`.
    ///
    /// Spawns the background writer, so this must run inside a Tokio runtime.
    pub fn new(prefs: Arc<dyn Preferences>) -> Self {
        let writer = SaveQueue::spawn(prefs.clone(), TASKS_KEY);
        Self {
            prefs,
            writer,
            tasks: Vec::new(),
            sort_order: SortOrder::default(),
        }
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// Malformed stored data resets the list to empty instead of failing.
    /// Only a failure of the collaborator itself is returned as an error.
    pub async fn load(&mut self) -> Result<LoadOutcome> {
        let outcome = match self.prefs.get_string(TASKS_KEY).await? {
            None => {
                self.tasks.clear();
                LoadOutcome::Missing
            }
            Some(payload) => match decode_tasks(&payload) {
                Decoded::Tasks(tasks) => {
                    self.tasks = tasks;
                    LoadOutcome::Loaded(self.tasks.len())
                }
                Decoded::Fallback { reason } => {
                    log::warn!("Discarding malformed task list: {}", reason);
                    self.tasks.clear();
                    LoadOutcome::Recovered { reason }
                }
            },
        };
        self.sort();
        log::info!("Loaded task list: {:?}", outcome);
        Ok(outcome)
    }

    /// Tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn is_descending(&self) -> bool {
        self.sort_order.is_descending()
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Add a task with a trimmed name. Blank names are rejected without a write.
    pub fn add(&mut self, name: &str, priority: Priority) -> AddOutcome {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("Rejected blank task name");
            return AddOutcome::RejectedBlank;
        }

        // Appended last, so among equal sort keys it stays last after the
        // stable sort.
        self.tasks.push(Task::new(name, priority));
        self.sort();
        let index = self
            .tasks
            .iter()
            .rposition(|t| t.name == name && t.priority == priority && !t.completed)
            .unwrap_or(self.tasks.len() - 1);
        log::info!("Added task '{}' ({})", name, priority);
        self.save();
        AddOutcome::Added { index }
    }

    /// Set the completion flag. Completion is not a sort key, so no re-sort.
    pub fn set_completed(&mut self, index: usize, completed: bool) -> Result<()> {
        let task = self.task_mut(index)?;
        task.completed = completed;
        log::info!("Set task {} completed={}", index, completed);
        self.save();
        Ok(())
    }

    /// Remove a task. Removal keeps the remaining order sorted.
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        log::info!("Deleted task '{}'", removed.name);
        self.save();
        Ok(removed)
    }

    /// Change a task's priority and re-sort.
    pub fn set_priority(&mut self, index: usize, priority: Priority) -> Result<()> {
        let task = self.task_mut(index)?;
        task.priority = priority;
        log::info!("Set task {} priority={}", index, priority);
        self.sort();
        self.save();
        Ok(())
    }

    /// Flip the primary sort direction and re-sort. The order is not persisted.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        log::debug!("Sort order now {:?}", self.sort_order);
        self.sort();
    }

    /// Wait for every queued write; report the first failure since the last flush.
    pub async fn flush(&self) -> Result<()> {
        self.writer.flush().await
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(TaskListError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    fn task_mut(&mut self, index: usize) -> Result<&mut Task> {
        let len = self.tasks.len();
        self.tasks
            .get_mut(index)
            .ok_or(TaskListError::IndexOutOfRange { index, len })
    }

    fn sort(&mut self) {
        self.sort_order.sort(&mut self.tasks);
    }

    fn save(&self) {
        match encode_tasks(&self.tasks) {
            Ok(payload) => self.writer.submit(payload),
            Err(e) => log::error!("Failed to encode task list: {}", e),
        }
    }
}
