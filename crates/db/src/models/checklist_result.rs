//! Persisted checklist result model.

use fieldops_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A result row from the `checklist_results` table.
///
/// `activity_id` is `-1` for general-observation records; in that case
/// `value` holds the checklist category string.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChecklistResult {
    pub id: DbId,
    pub equipment_code: String,
    pub activity_id: DbId,
    pub value: String,
    pub note: String,
    pub recorded_by: Option<DbId>,
    pub created_at: Timestamp,
}
