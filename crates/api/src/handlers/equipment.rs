//! Handlers for the `/equipment` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use fieldops_core::error::CoreError;
use fieldops_core::types::DbId;
use fieldops_db::models::equipment::Equipment;
use fieldops_db::repositories::{EquipmentRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/equipment/{id}
pub async fn get_equipment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let equipment = find_owned_equipment(&state, &auth, equipment_id).await?;
    Ok(Json(DataResponse { data: equipment }))
}

/// Fetch an equipment unit and verify its parent task is assigned to
/// the authenticated technician. Units on other technicians' tasks
/// surface as 404.
pub(crate) async fn find_owned_equipment(
    state: &AppState,
    auth: &AuthUser,
    equipment_id: DbId,
) -> AppResult<Equipment> {
    let equipment = EquipmentRepo::find_by_id(&state.pool, equipment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id: equipment_id,
        }))?;

    let owned = TaskRepo::find_by_id(&state.pool, equipment.task_id)
        .await?
        .is_some_and(|t| t.technician_id == auth.user_id);

    if !owned {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id: equipment_id,
        }));
    }

    Ok(equipment)
}
