//! Task list use-case service.
//!
//! # Responsibility
//! - Provide the add/delete/replace/list flows a shell's buttons map to.
//! - Tie the in-memory store to its persistence target.
//!
//! # Invariants
//! - Every failing operation leaves the store exactly as it was.
//! - Load replaces the collection only after the whole file parsed.

use crate::file::{load_tasks, save_tasks, FileError};
use crate::model::task::{Priority, Task, TaskId};
use crate::store::task_store::{StoreError, TaskStore};
use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error carrying the full failure taxonomy under one type.
#[derive(Debug)]
pub enum ServiceError {
    /// Collection-level failure (validation, range, identity).
    Store(StoreError),
    /// File-level failure (I/O, format identity, parsing).
    File(FileError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::File(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::File(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<FileError> for ServiceError {
    fn from(value: FileError) -> Self {
        Self::File(value)
    }
}

/// Facade over the task store and its persistence target.
///
/// One instance per task list; the embedding shell holds it for the life of
/// the window and drives it from its controls.
pub struct TaskService {
    store: TaskStore,
    tasks_path: PathBuf,
}

impl TaskService {
    /// Creates a service with an empty store persisting to
    /// [`crate::file::default_tasks_path`].
    pub fn new() -> Self {
        Self::with_tasks_path(crate::file::default_tasks_path())
    }

    /// Creates a service with an explicit persistence target.
    pub fn with_tasks_path(path: impl Into<PathBuf>) -> Self {
        Self {
            store: TaskStore::new(),
            tasks_path: path.into(),
        }
    }

    /// Path task data is saved to and reloaded from.
    pub fn tasks_path(&self) -> &Path {
        &self.tasks_path
    }

    /// Read view of the underlying store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Constructs a task and appends it to the list.
    ///
    /// Invalid input (empty or multi-line description) is rejected before
    /// anything is stored or persisted.
    pub fn add_task(
        &mut self,
        description: impl Into<String>,
        when: NaiveDateTime,
        priority: Priority,
    ) -> ServiceResult<TaskId> {
        let task = Task::new(description, when, priority).map_err(StoreError::Validation)?;
        Ok(self.store.add(task)?)
    }

    /// Removes and returns the task at `index`.
    pub fn delete_task_at(&mut self, index: usize) -> ServiceResult<Task> {
        Ok(self.store.delete_at(index)?)
    }

    /// Replaces the task at `index` with a freshly constructed one.
    ///
    /// The slot keeps its position; the new record carries a new id.
    pub fn replace_task_at(
        &mut self,
        index: usize,
        description: impl Into<String>,
        when: NaiveDateTime,
        priority: Priority,
    ) -> ServiceResult<()> {
        let task = Task::new(description, when, priority).map_err(StoreError::Validation)?;
        Ok(self.store.replace_at(index, task)?)
    }

    /// One presentation line per task, list order.
    pub fn task_display_lines(&self) -> Vec<String> {
        self.store.display_lines()
    }

    /// Empties the list without touching the file.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Saves the current list to the configured path.
    pub fn save(&self) -> ServiceResult<()> {
        self.save_to(&self.tasks_path)
    }

    /// Saves the current list to an explicit path.
    pub fn save_to(&self, path: impl AsRef<Path>) -> ServiceResult<()> {
        Ok(save_tasks(self.store.tasks(), path)?)
    }

    /// Replaces the list with the contents of the configured path.
    ///
    /// Returns the number of tasks loaded. On any failure the in-memory
    /// list is left exactly as it was.
    pub fn reload(&mut self) -> ServiceResult<usize> {
        let path = self.tasks_path.clone();
        self.load_from(path)
    }

    /// Replaces the list with the contents of an explicit path.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> ServiceResult<usize> {
        let tasks = load_tasks(path)?;
        let count = tasks.len();
        self.store.replace_all(tasks)?;
        Ok(count)
    }
}

impl Default for TaskService {
    fn default() -> Self {
        Self::new()
    }
}
