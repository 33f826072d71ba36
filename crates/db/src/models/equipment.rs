//! Equipment model and DTOs.

use fieldops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An equipment row from the `equipment` table.
///
/// `code` is the string identifier checklist results are keyed by.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub id: DbId,
    pub task_id: DbId,
    pub code: String,
    pub name: String,
    pub location: Option<String>,
    pub equipment_type: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new piece of equipment.
#[derive(Debug, Deserialize)]
pub struct CreateEquipment {
    pub task_id: DbId,
    pub code: String,
    pub name: String,
    pub location: Option<String>,
    pub equipment_type: Option<String>,
}
