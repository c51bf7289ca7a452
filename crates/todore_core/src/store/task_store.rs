//! Ordered in-memory task store.
//!
//! # Responsibility
//! - Own the mutable task list: positional CRUD plus id-based access.
//! - Preserve insertion order; it is also display order and persisted order.
//!
//! # Invariants
//! - Every task inside the store satisfies `Task::validate()`.
//! - Rejected operations leave the store exactly as it was.
//! - Indices are `usize`; out-of-range never panics, it reports `OutOfRange`.

use crate::model::task::{Task, TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic error for task store operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    OutOfRange { index: usize, len: usize },
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for store of length {len}")
            }
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::OutOfRange { .. } => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered, mutable, in-memory task collection.
///
/// Single-threaded by design; embedding shells that need sharing wrap it
/// themselves. Append is amortized O(1), positional remove/replace and id
/// lookup are O(n).
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Task with the given stable id, or `None` when absent.
    pub fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Current position of the task with the given id.
    ///
    /// Positions shift on delete, so callers holding one across mutations
    /// should re-resolve it.
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Validates and appends, returning the task's stable id.
    pub fn add(&mut self, task: Task) -> StoreResult<TaskId> {
        task.validate()?;
        let id = task.id();
        self.tasks.push(task);
        Ok(id)
    }

    /// Removes and returns the task at `index`.
    pub fn delete_at(&mut self, index: usize) -> StoreResult<Task> {
        if index >= self.tasks.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(self.tasks.remove(index))
    }

    /// Removes and returns the task with the given id.
    pub fn delete_by_id(&mut self, id: TaskId) -> StoreResult<Task> {
        let index = self.position_of(id).ok_or(StoreError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Replaces the task at `index` in place.
    ///
    /// The replacement keeps its own id; the slot's position is unchanged.
    pub fn replace_at(&mut self, index: usize, task: Task) -> StoreResult<()> {
        task.validate()?;
        let len = self.tasks.len();
        let slot = self
            .tasks
            .get_mut(index)
            .ok_or(StoreError::OutOfRange { index, len })?;
        *slot = task;
        Ok(())
    }

    /// Replaces the task with the given id in place.
    pub fn replace_by_id(&mut self, id: TaskId, task: Task) -> StoreResult<()> {
        task.validate()?;
        let index = self.position_of(id).ok_or(StoreError::NotFound(id))?;
        self.tasks[index] = task;
        Ok(())
    }

    /// Replaces the whole collection.
    ///
    /// Every incoming task is validated first; on any failure the store is
    /// left untouched. Used after a successful file load.
    pub fn replace_all(&mut self, tasks: Vec<Task>) -> StoreResult<()> {
        for task in &tasks {
            task.validate()?;
        }
        self.tasks = tasks;
        Ok(())
    }

    /// Empties the store.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Snapshot of the collection in store order, as handed to the file
    /// layer on save.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// One presentation line per task, store order.
    pub fn display_lines(&self) -> Vec<String> {
        self.tasks.iter().map(Task::display_line).collect()
    }
}
