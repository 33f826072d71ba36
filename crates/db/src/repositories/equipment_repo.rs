//! Repository for the `equipment` table.

use fieldops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::equipment::{CreateEquipment, Equipment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, code, name, location, equipment_type, created_at";

/// Provides CRUD operations for equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Insert a new piece of equipment, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateEquipment,
    ) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment (task_id, code, name, location, equipment_type)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(input.task_id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.equipment_type)
            .fetch_one(pool)
            .await
    }

    /// Find equipment by internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all equipment attached to a task, in insertion order.
    pub async fn list_for_task(
        pool: &SqlitePool,
        task_id: DbId,
    ) -> Result<Vec<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE task_id = $1 ORDER BY id");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }
}
