//! Task file storage entry points.
//!
//! # Responsibility
//! - Persist and restore the ordered task list through the versioned
//!   line-oriented task file format.
//! - Keep format details (token, version, record layout) inside this module.
//!
//! # Invariants
//! - Format identity is checked before any record is parsed.
//! - Load never returns a partially parsed collection: any failure discards
//!   everything read so far.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod task_file;

pub use task_file::{
    default_tasks_path, load_tasks, priority_from_wire, priority_wire_name, save_tasks,
    FILE_TOKEN, FILE_VERSION,
};

pub type FileResult<T> = Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    /// Reading or writing the file failed at the OS level.
    Io(std::io::Error),
    /// The first line is not the task file token.
    TokenMismatch { found: String },
    /// The second line is not a version this build understands.
    VersionMismatch { found: String },
    /// A line inside the document could not be interpreted.
    Parse { line: usize, message: String },
}

impl Display for FileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::TokenMismatch { found } => {
                write!(f, "not a task file: unrecognized token `{found}`")
            }
            Self::VersionMismatch { found } => {
                write!(f, "unsupported task file version `{found}`")
            }
            Self::Parse { line, message } => write!(f, "line {line}: {message}"),
        }
    }
}

impl Error for FileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::TokenMismatch { .. } => None,
            Self::VersionMismatch { .. } => None,
            Self::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for FileError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
