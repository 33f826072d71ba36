//! Repository for the `equipment_photos` table.

use fieldops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::photo::{CreatePhoto, EquipmentPhoto};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, equipment_id, file_path, caption, taken_by, created_at";

/// Append-and-list store for equipment photos.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Record a photo, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreatePhoto,
    ) -> Result<EquipmentPhoto, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment_photos (equipment_id, file_path, caption, taken_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EquipmentPhoto>(&query)
            .bind(input.equipment_id)
            .bind(&input.file_path)
            .bind(&input.caption)
            .bind(input.taken_by)
            .fetch_one(pool)
            .await
    }

    /// List all photos for a piece of equipment, oldest first.
    pub async fn list_for_equipment(
        pool: &SqlitePool,
        equipment_id: DbId,
    ) -> Result<Vec<EquipmentPhoto>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM equipment_photos WHERE equipment_id = $1 ORDER BY id");
        sqlx::query_as::<_, EquipmentPhoto>(&query)
            .bind(equipment_id)
            .fetch_all(pool)
            .await
    }
}
