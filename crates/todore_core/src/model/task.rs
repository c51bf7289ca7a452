//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by the store, the file layer and callers.
//! - Enforce the description write policy (invalid input never overwrites
//!   valid state).
//!
//! # Invariants
//! - `id` is stable for the lifetime of a task and never nil.
//! - `description` is non-empty and single-line once a task exists.
//! - `priority` is always a member of the closed [`Priority`] set.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task held in a store.
///
/// Kept as a type alias to make identity semantics explicit in signatures.
/// Ids are generated per process; the task file format does not carry them,
/// so reloading a file assigns fresh ones.
pub type TaskId = Uuid;

/// Urgency level attached to a task.
///
/// Closed set, ordered from least to most pressing. The default is the
/// middle member so an unspecified priority lands on `Normal`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait indefinitely.
    Lowest,
    /// Nice to get to.
    Low,
    /// Everyday work.
    #[default]
    Normal,
    /// Should be handled soon.
    High,
    /// Drop everything else.
    Urgent,
}

impl Priority {
    /// Every member in ascending order, for callers that present a
    /// selectable list.
    pub const ALL: [Priority; 5] = [
        Priority::Lowest,
        Priority::Low,
        Priority::Normal,
        Priority::High,
        Priority::Urgent,
    ];

    /// Human-readable label used in display lines.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Lowest => "Lowest",
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a task value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The description was empty.
    EmptyDescription,
    /// The description contained a line break, which the line-oriented task
    /// file cannot represent.
    MultilineDescription,
    /// The caller-supplied id was the nil UUID.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description must not be empty"),
            Self::MultilineDescription => {
                write!(f, "task description must not contain line breaks")
            }
            Self::NilId => write!(f, "task id must not be the nil UUID"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item.
///
/// The description is kept private so every write goes through the
/// validating paths; timestamp and priority accept any member value and stay
/// public like the rest of the model surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskFields")]
pub struct Task {
    id: TaskId,
    description: String,
    /// Due date and time, second resolution, no timezone semantics.
    pub date_and_time: NaiveDateTime,
    /// Urgency level; defaults to [`Priority::Normal`] when unspecified.
    pub priority: Priority,
}

/// Raw field mirror used to validate deserialized tasks.
#[derive(Deserialize)]
struct TaskFields {
    id: TaskId,
    description: String,
    date_and_time: NaiveDateTime,
    priority: Priority,
}

impl TryFrom<TaskFields> for Task {
    type Error = TaskValidationError;

    fn try_from(fields: TaskFields) -> Result<Self, Self::Error> {
        Task::with_id(
            fields.id,
            fields.description,
            fields.date_and_time,
            fields.priority,
        )
    }
}

impl Task {
    /// Creates a task with a generated stable id.
    ///
    /// # Errors
    /// - [`TaskValidationError::EmptyDescription`] for an empty description.
    /// - [`TaskValidationError::MultilineDescription`] for a description
    ///   containing `\n` or `\r`.
    pub fn new(
        description: impl Into<String>,
        date_and_time: NaiveDateTime,
        priority: Priority,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), description, date_and_time, priority)
    }

    /// Creates a task with a caller-provided stable id.
    ///
    /// Used by tests and import paths where identity already exists.
    ///
    /// # Errors
    /// Same as [`Task::new`], plus [`TaskValidationError::NilId`] when `id`
    /// is nil.
    pub fn with_id(
        id: TaskId,
        description: impl Into<String>,
        date_and_time: NaiveDateTime,
        priority: Priority,
    ) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        let description = description.into();
        check_description(&description)?;
        Ok(Self {
            id,
            description,
            date_and_time,
            priority,
        })
    }

    /// Stable id assigned at construction.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Current description text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Overwrites the description when the new value is valid.
    ///
    /// An empty or multi-line value leaves the previous description
    /// unchanged and returns `false`.
    pub fn set_description(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if check_description(&value).is_err() {
            return false;
        }
        self.description = value;
        true
    }

    /// Re-checks the description invariant.
    ///
    /// Store write paths call this before mutating, so values that bypassed
    /// the constructors (e.g. deserialized elsewhere) still cannot enter a
    /// store in an invalid state.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        check_description(&self.description)
    }

    /// One presentation line: date, time, padded priority label, description.
    ///
    /// Seconds are stored but not displayed, matching the minute-resolution
    /// entry surface of a scheduling form.
    pub fn display_line(&self) -> String {
        format!(
            "{}  {:<8} {}",
            self.date_and_time.format("%Y-%m-%d %H:%M"),
            self.priority.label(),
            self.description
        )
    }
}

fn check_description(value: &str) -> Result<(), TaskValidationError> {
    if value.is_empty() {
        return Err(TaskValidationError::EmptyDescription);
    }
    if value.contains(['\n', '\r']) {
        return Err(TaskValidationError::MultilineDescription);
    }
    Ok(())
}
