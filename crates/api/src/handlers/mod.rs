//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `fieldops_db` (and, for
//! checklists, to the session logic in `fieldops_core`) and map errors
//! via [`crate::error::AppError`].

pub mod auth;
pub mod checklist;
pub mod equipment;
pub mod finalization;
pub mod photos;
pub mod tasks;
