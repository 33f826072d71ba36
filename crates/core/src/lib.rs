//! Domain types and pure business logic for the fieldops backend.
//!
//! Everything in this crate is I/O-free: the checklist session state
//! machine, the shared error enum, and the primitive type aliases used by
//! the storage and API crates.

pub mod checklist;
pub mod error;
pub mod types;
