//! Repository for the `finalizations` table.

use fieldops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::finalization::{CreateFinalization, Finalization};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, equipment_id, summary, operational, recorded_by, created_at";

/// Store for per-equipment finalization records.
pub struct FinalizationRepo;

impl FinalizationRepo {
    /// Insert a finalization record, returning the created row. The unique
    /// constraint on `equipment_id` surfaces a second attempt as a
    /// constraint violation, which the API maps to 409.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateFinalization,
    ) -> Result<Finalization, sqlx::Error> {
        let query = format!(
            "INSERT INTO finalizations (equipment_id, summary, operational, recorded_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Finalization>(&query)
            .bind(input.equipment_id)
            .bind(&input.summary)
            .bind(input.operational)
            .bind(input.recorded_by)
            .fetch_one(pool)
            .await
    }

    /// Find the finalization record for a piece of equipment, if any.
    pub async fn find_for_equipment(
        pool: &SqlitePool,
        equipment_id: DbId,
    ) -> Result<Option<Finalization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM finalizations WHERE equipment_id = $1");
        sqlx::query_as::<_, Finalization>(&query)
            .bind(equipment_id)
            .fetch_optional(pool)
            .await
    }
}
