//! Activity catalog rows and their conversion into core domain types.

use std::str::FromStr;

use fieldops_core::checklist::{Activity, CandidateResponse, ChecklistCategory, SelectionMode};
use fieldops_core::types::DbId;
use sqlx::FromRow;

/// An activity row from the `activities` table. Category and selection
/// mode are TEXT columns guarded by CHECK constraints; [`ActivityRow::into_domain`]
/// parses them into the core enums.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub selection_mode: String,
    pub position: i64,
}

impl ActivityRow {
    pub fn into_domain(self) -> Result<Activity, sqlx::Error> {
        let category =
            ChecklistCategory::from_str(&self.category).map_err(|e| sqlx::Error::Decode(e.into()))?;
        let selection_mode =
            SelectionMode::from_str(&self.selection_mode).map_err(|e| sqlx::Error::Decode(e.into()))?;
        Ok(Activity {
            id: self.id,
            name: self.name,
            category,
            selection_mode,
        })
    }
}

/// A candidate-response row from the `activity_responses` table.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityResponseRow {
    pub id: DbId,
    pub activity_id: DbId,
    pub label: String,
    pub value: String,
    pub is_affirmative: bool,
    pub position: i64,
}

impl From<ActivityResponseRow> for CandidateResponse {
    fn from(row: ActivityResponseRow) -> Self {
        CandidateResponse {
            id: row.id,
            activity_id: row.activity_id,
            label: row.label,
            value: row.value,
            is_affirmative: row.is_affirmative,
        }
    }
}

/// DTO for inserting a catalog activity (fixtures and tests).
#[derive(Debug)]
pub struct CreateActivity {
    pub name: String,
    pub category: ChecklistCategory,
    pub selection_mode: SelectionMode,
    pub position: i64,
}

/// DTO for inserting a candidate response (fixtures and tests).
#[derive(Debug)]
pub struct CreateActivityResponse {
    pub activity_id: DbId,
    pub label: String,
    pub value: String,
    pub is_affirmative: bool,
    pub position: i64,
}
