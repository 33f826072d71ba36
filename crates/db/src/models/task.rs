//! Maintenance task model and DTOs.

use fieldops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Task statuses accepted by `PUT /tasks/{id}/status`.
pub const VALID_TASK_STATUSES: &[&str] = &["pending", "in_progress", "completed"];

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    /// Human-facing work-order code, e.g. `"OT-2031"`.
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub scheduled_for: Option<String>,
    pub technician_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_for: Option<String>,
    pub technician_id: DbId,
}

/// Request body for `PUT /tasks/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatus {
    pub status: String,
}
