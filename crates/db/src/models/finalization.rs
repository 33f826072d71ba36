//! Equipment finalization record model and DTOs.

use fieldops_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A finalization row from the `finalizations` table. At most one exists
/// per piece of equipment (unique constraint).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Finalization {
    pub id: DbId,
    pub equipment_id: DbId,
    pub summary: String,
    pub operational: bool,
    pub recorded_by: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a finalization record.
pub struct CreateFinalization {
    pub equipment_id: DbId,
    pub summary: String,
    pub operational: bool,
    pub recorded_by: DbId,
}
