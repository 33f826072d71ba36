//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - Where patching is supported, an update DTO with all-`Option` fields

pub mod activity;
pub mod checklist_result;
pub mod equipment;
pub mod finalization;
pub mod photo;
pub mod session;
pub mod task;
pub mod user;
