//! In-memory storage layer for ordered task collections.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the ordered task list.
//! - Keep collection bookkeeping out of service/business orchestration.
//!
//! # Invariants
//! - Write paths must enforce `Task::validate()` before mutating.
//! - APIs return semantic errors (`OutOfRange`, `NotFound`) instead of
//!   panicking on bad indices or unknown ids.

pub mod task_store;
