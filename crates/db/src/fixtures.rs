//! First-run seeding from bundled JSON fixtures.
//!
//! The activity/response catalog ships with the binary
//! (`fixtures/activities.json`) and is loaded once into an empty database.
//! A small set of demo tasks and equipment (`fixtures/tasks.json`) gives a
//! freshly provisioned install something to show; both seeders are
//! idempotent no-ops when their tables already contain rows.

use fieldops_core::checklist::{ChecklistCategory, SelectionMode};
use fieldops_core::types::DbId;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::models::activity::{CreateActivity, CreateActivityResponse};
use crate::models::equipment::CreateEquipment;
use crate::models::task::CreateTask;
use crate::repositories::{ActivityRepo, EquipmentRepo, TaskRepo};

const ACTIVITIES_JSON: &str = include_str!("../fixtures/activities.json");
const TASKS_JSON: &str = include_str!("../fixtures/tasks.json");

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Deserialize)]
struct ActivityFixture {
    name: String,
    category: ChecklistCategory,
    selection_mode: SelectionMode,
    responses: Vec<ResponseFixture>,
}

#[derive(Debug, Deserialize)]
struct ResponseFixture {
    label: String,
    value: String,
    #[serde(default)]
    is_affirmative: bool,
}

#[derive(Debug, Deserialize)]
struct TaskFixture {
    code: String,
    title: String,
    description: Option<String>,
    scheduled_for: Option<String>,
    equipment: Vec<EquipmentFixture>,
}

#[derive(Debug, Deserialize)]
struct EquipmentFixture {
    code: String,
    name: String,
    location: Option<String>,
    equipment_type: Option<String>,
}

/// Seed the activity catalog from the bundled fixture. Returns `false`
/// without touching anything when the catalog already has rows.
pub async fn seed_catalog(pool: &SqlitePool) -> Result<bool, FixtureError> {
    if ActivityRepo::count(pool).await? > 0 {
        return Ok(false);
    }

    let fixtures: Vec<ActivityFixture> = serde_json::from_str(ACTIVITIES_JSON)?;
    let activity_count = fixtures.len();

    for (position, fixture) in fixtures.into_iter().enumerate() {
        let activity_id = ActivityRepo::create(
            pool,
            &CreateActivity {
                name: fixture.name,
                category: fixture.category,
                selection_mode: fixture.selection_mode,
                position: position as i64,
            },
        )
        .await?;

        for (response_position, response) in fixture.responses.into_iter().enumerate() {
            ActivityRepo::add_response(
                pool,
                &CreateActivityResponse {
                    activity_id,
                    label: response.label,
                    value: response.value,
                    is_affirmative: response.is_affirmative,
                    position: response_position as i64,
                },
            )
            .await?;
        }
    }

    tracing::info!(activity_count, "Seeded activity catalog from fixtures");
    Ok(true)
}

/// Seed demo tasks and their equipment, assigned to `technician_id`.
/// Returns `false` without touching anything when tasks already exist.
pub async fn seed_demo_tasks(
    pool: &SqlitePool,
    technician_id: DbId,
) -> Result<bool, FixtureError> {
    if TaskRepo::count(pool).await? > 0 {
        return Ok(false);
    }

    let fixtures: Vec<TaskFixture> = serde_json::from_str(TASKS_JSON)?;
    let task_count = fixtures.len();

    for fixture in fixtures {
        let task = TaskRepo::create(
            pool,
            &CreateTask {
                code: fixture.code,
                title: fixture.title,
                description: fixture.description,
                scheduled_for: fixture.scheduled_for,
                technician_id,
            },
        )
        .await?;

        for equipment in fixture.equipment {
            EquipmentRepo::create(
                pool,
                &CreateEquipment {
                    task_id: task.id,
                    code: equipment.code,
                    name: equipment.name,
                    location: equipment.location,
                    equipment_type: equipment.equipment_type,
                },
            )
            .await?;
        }
    }

    tracing::info!(task_count, technician_id, "Seeded demo tasks from fixtures");
    Ok(true)
}
