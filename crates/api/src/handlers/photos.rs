//! Handlers for equipment photo records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fieldops_core::types::DbId;
use fieldops_db::models::photo::CreatePhoto;
use fieldops_db::repositories::PhotoRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::equipment::find_owned_equipment;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of POST /api/v1/equipment/{id}/photos.
#[derive(Debug, Deserialize, Validate)]
pub struct PhotoRequest {
    /// Device-local path of the captured image.
    #[validate(length(min = 1, max = 512, message = "file_path must be 1-512 characters"))]
    pub file_path: String,
    #[validate(length(max = 500, message = "caption must be at most 500 characters"))]
    pub caption: Option<String>,
}

/// POST /api/v1/equipment/{id}/photos
pub async fn add_photo(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
    Json(input): Json<PhotoRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let equipment = find_owned_equipment(&state, &auth, equipment_id).await?;

    let photo = PhotoRepo::create(
        &state.pool,
        &CreatePhoto {
            equipment_id: equipment.id,
            file_path: input.file_path,
            caption: input.caption,
            taken_by: Some(auth.user_id),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

/// GET /api/v1/equipment/{id}/photos
pub async fn list_photos(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let equipment = find_owned_equipment(&state, &auth, equipment_id).await?;
    let photos = PhotoRepo::list_for_equipment(&state.pool, equipment.id).await?;
    Ok(Json(DataResponse { data: photos }))
}
