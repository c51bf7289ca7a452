//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and file-layer calls into use-case level APIs.
//! - Keep embedding shells decoupled from storage and format details.

pub mod task_service;
