//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the canonical task record used by core business logic.
//! - Keep one UI-agnostic shape that any shell can project.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Invalid field values are rejected at the model boundary, never stored.

pub mod task;
