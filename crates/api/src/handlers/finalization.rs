//! Handlers for equipment finalization records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fieldops_core::error::CoreError;
use fieldops_core::types::DbId;
use fieldops_db::models::finalization::CreateFinalization;
use fieldops_db::repositories::FinalizationRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::equipment::find_owned_equipment;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of POST /api/v1/equipment/{id}/finalization.
#[derive(Debug, Deserialize, Validate)]
pub struct FinalizationRequest {
    #[validate(length(min = 1, max = 2000, message = "summary must be 1-2000 characters"))]
    pub summary: String,
    /// Whether the equipment was left in operating condition.
    pub operational: bool,
}

/// POST /api/v1/equipment/{id}/finalization
///
/// Close out work on an equipment unit. At most one finalization exists
/// per unit; a repeat attempt surfaces as 409.
pub async fn finalize_equipment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
    Json(input): Json<FinalizationRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let equipment = find_owned_equipment(&state, &auth, equipment_id).await?;

    let finalization = FinalizationRepo::create(
        &state.pool,
        &CreateFinalization {
            equipment_id: equipment.id,
            summary: input.summary,
            operational: input.operational,
            recorded_by: auth.user_id,
        },
    )
    .await?;

    tracing::info!(
        equipment_id,
        operational = finalization.operational,
        user_id = auth.user_id,
        "Equipment finalized"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: finalization }),
    ))
}

/// GET /api/v1/equipment/{id}/finalization
pub async fn get_finalization(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let equipment = find_owned_equipment(&state, &auth, equipment_id).await?;
    let finalization = FinalizationRepo::find_for_equipment(&state.pool, equipment.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Finalization",
            id: equipment_id,
        }))?;
    Ok(Json(DataResponse { data: finalization }))
}
