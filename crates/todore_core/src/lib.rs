//! Core domain logic for ToDoRe, a desktop to-do reminder.
//! This crate is the single source of truth for business invariants.

pub mod file;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use file::{
    default_tasks_path, load_tasks, priority_from_wire, priority_wire_name, save_tasks, FileError,
    FileResult, FILE_TOKEN, FILE_VERSION,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId, TaskValidationError};
pub use service::task_service::{ServiceError, ServiceResult, TaskService};
pub use store::task_store::{StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
