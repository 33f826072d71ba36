//! Equipment photo model and DTOs.

use fieldops_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A photo row from the `equipment_photos` table. The image file itself
/// lives on the device; only its path and caption are recorded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EquipmentPhoto {
    pub id: DbId,
    pub equipment_id: DbId,
    pub file_path: String,
    pub caption: Option<String>,
    pub taken_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for recording a photo.
pub struct CreatePhoto {
    pub equipment_id: DbId,
    pub file_path: String,
    pub caption: Option<String>,
    pub taken_by: Option<DbId>,
}
