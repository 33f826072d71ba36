//! Repository for the activity catalog (`activities` + `activity_responses`).

use fieldops_core::checklist::{ActivityWithResponses, ChecklistCategory};
use fieldops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::activity::{
    ActivityResponseRow, ActivityRow, CreateActivity, CreateActivityResponse,
};

const ACTIVITY_COLUMNS: &str = "id, name, category, selection_mode, position";
const RESPONSE_COLUMNS: &str = "id, activity_id, label, value, is_affirmative, position";

/// Read side of the checklist loader plus the inserts used by fixture
/// seeding and tests.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a catalog activity, returning its id.
    pub async fn create(pool: &SqlitePool, input: &CreateActivity) -> Result<DbId, sqlx::Error> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO activities (name, category, selection_mode, position)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.category.as_str())
        .bind(input.selection_mode.as_str())
        .bind(input.position)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Insert a candidate response for an activity, returning its id.
    pub async fn add_response(
        pool: &SqlitePool,
        input: &CreateActivityResponse,
    ) -> Result<DbId, sqlx::Error> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO activity_responses (activity_id, label, value, is_affirmative, position)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(input.activity_id)
        .bind(&input.label)
        .bind(&input.value)
        .bind(input.is_affirmative)
        .bind(input.position)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Fetch the ordered activities of a category, each with its ordered
    /// candidate responses eagerly attached. An empty result is valid.
    pub async fn list_with_responses(
        pool: &SqlitePool,
        category: ChecklistCategory,
    ) -> Result<Vec<ActivityWithResponses>, sqlx::Error> {
        let query = format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities
             WHERE category = $1
             ORDER BY position, id"
        );
        let activity_rows = sqlx::query_as::<_, ActivityRow>(&query)
            .bind(category.as_str())
            .fetch_all(pool)
            .await?;

        let mut items = Vec::with_capacity(activity_rows.len());
        for row in activity_rows {
            let query = format!(
                "SELECT {RESPONSE_COLUMNS} FROM activity_responses
                 WHERE activity_id = $1
                 ORDER BY position, id"
            );
            let responses = sqlx::query_as::<_, ActivityResponseRow>(&query)
                .bind(row.id)
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();

            items.push(ActivityWithResponses {
                activity: row.into_domain()?,
                responses,
            });
        }

        Ok(items)
    }

    /// Total number of catalog activities. Used by fixture seeding.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activities")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
