//! Handlers for the `/tasks` resource.
//!
//! Technicians only ever see their own assigned tasks; a task belonging
//! to someone else behaves as if it did not exist.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use fieldops_core::error::CoreError;
use fieldops_core::types::DbId;
use fieldops_db::models::task::{Task, UpdateTaskStatus, VALID_TASK_STATUSES};
use fieldops_db::repositories::{EquipmentRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tasks
///
/// List the authenticated technician's assigned tasks.
pub async fn list_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tasks = TaskRepo::list_for_technician(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /api/v1/tasks/{id}
pub async fn get_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = find_owned_task(&state, &auth, task_id).await?;
    Ok(Json(DataResponse { data: task }))
}

/// PUT /api/v1/tasks/{id}/status
///
/// Move a task through its workflow (`pending` -> `in_progress` ->
/// `completed`). Any of the valid statuses may be set directly.
pub async fn update_task_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<UpdateTaskStatus>,
) -> AppResult<impl IntoResponse> {
    if !VALID_TASK_STATUSES.contains(&input.status.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid task status '{}'. Must be one of: {}",
            input.status,
            VALID_TASK_STATUSES.join(", ")
        ))));
    }

    find_owned_task(&state, &auth, task_id).await?;

    let task = TaskRepo::update_status(&state.pool, task_id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;

    tracing::info!(task_id, status = %task.status, user_id = auth.user_id, "Task status updated");

    Ok(Json(DataResponse { data: task }))
}

/// GET /api/v1/tasks/{id}/equipment
///
/// List the equipment attached to one of the technician's tasks.
pub async fn list_task_equipment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_owned_task(&state, &auth, task_id).await?;

    let equipment = EquipmentRepo::list_for_task(&state.pool, task_id).await?;
    Ok(Json(DataResponse { data: equipment }))
}

/// Fetch a task and verify it is assigned to the authenticated
/// technician. Tasks assigned to others surface as 404.
async fn find_owned_task(state: &AppState, auth: &AuthUser, task_id: DbId) -> AppResult<Task> {
    let task = TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .filter(|t| t.technician_id == auth.user_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    Ok(task)
}
