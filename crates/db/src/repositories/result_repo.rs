//! Repository for the `checklist_results` table.
//!
//! Results are append-only: saving a checklist emits independent inserts
//! with no transaction boundary, and there are no update or delete paths.

use fieldops_core::checklist::NewChecklistResult;
use fieldops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::checklist_result::ChecklistResult;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, equipment_code, activity_id, value, note, recorded_by, created_at";

/// Append-only store for checklist results.
pub struct ResultRepo;

impl ResultRepo {
    /// Insert one result row, returning the created row. A failure here
    /// propagates to the caller; there is no retry or rollback of rows
    /// already written, as each record is self-contained.
    pub async fn insert(
        pool: &SqlitePool,
        input: &NewChecklistResult,
        recorded_by: Option<DbId>,
    ) -> Result<ChecklistResult, sqlx::Error> {
        let query = format!(
            "INSERT INTO checklist_results (equipment_code, activity_id, value, note, recorded_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChecklistResult>(&query)
            .bind(&input.equipment_code)
            .bind(input.activity_id)
            .bind(&input.value)
            .bind(&input.note)
            .bind(recorded_by)
            .fetch_one(pool)
            .await
    }

    /// List all results recorded for an equipment code, oldest first.
    pub async fn list_for_equipment(
        pool: &SqlitePool,
        equipment_code: &str,
    ) -> Result<Vec<ChecklistResult>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checklist_results
             WHERE equipment_code = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, ChecklistResult>(&query)
            .bind(equipment_code)
            .fetch_all(pool)
            .await
    }
}
