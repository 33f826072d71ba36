//! Checklist template and result handlers.
//!
//! The template endpoint serves a fresh [`ChecklistSession`] built from
//! the activity catalog with default selections applied. The save
//! endpoint replays the client's submitted selections through the same
//! session logic, so selection-mode rules hold server-side regardless of
//! what the client sends.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fieldops_core::checklist::{ChecklistCategory, ChecklistSession};
use fieldops_core::error::CoreError;
use fieldops_core::types::DbId;
use fieldops_db::repositories::{ActivityRepo, ResultRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::equipment::find_owned_equipment;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// One activity's submitted state within a checklist save.
#[derive(Debug, Deserialize)]
pub struct SubmittedActivity {
    pub activity_id: DbId,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub response_ids: Vec<DbId>,
}

/// Body of POST /api/v1/equipment/{id}/results.
#[derive(Debug, Deserialize)]
pub struct SaveChecklistRequest {
    pub category: ChecklistCategory,
    #[serde(default)]
    pub general_observation: Option<String>,
    #[serde(default)]
    pub activities: Vec<SubmittedActivity>,
}

#[derive(Debug, Serialize)]
pub struct SaveChecklistResponse {
    pub saved: usize,
}

/// GET /api/v1/checklists/{category}
///
/// Serve the checklist template for a category: the catalog activities
/// with their candidate responses and the default selections already
/// applied.
pub async fn get_checklist_template(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category: ChecklistCategory = category.parse().map_err(AppError::Core)?;

    let activities = ActivityRepo::list_with_responses(&state.pool, category).await?;
    let session = ChecklistSession::new(category, activities);

    Ok(Json(DataResponse { data: session }))
}

/// POST /api/v1/equipment/{id}/results
///
/// Persist a completed checklist for an equipment unit. Submitted
/// response ids are replayed through a fresh session, so single-mode
/// activities keep at most one selection and responses must belong to
/// the activity they are submitted under.
pub async fn save_checklist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
    Json(input): Json<SaveChecklistRequest>,
) -> AppResult<impl IntoResponse> {
    let equipment = find_owned_equipment(&state, &auth, equipment_id).await?;

    let activities = ActivityRepo::list_with_responses(&state.pool, input.category).await?;
    let mut session = ChecklistSession::unselected(input.category, activities);

    for submitted in &input.activities {
        for &response_id in &submitted.response_ids {
            let response = session
                .response(submitted.activity_id, response_id)
                .cloned()
                .ok_or_else(|| {
                    AppError::Core(CoreError::Validation(format!(
                        "Response {response_id} does not belong to activity {}",
                        submitted.activity_id
                    )))
                })?;
            session.select(submitted.activity_id, response);
        }
        if let Some(note) = &submitted.note {
            session.set_note(submitted.activity_id, note.clone());
        }
    }
    if let Some(observation) = &input.general_observation {
        session.set_general_observation(observation.clone());
    }

    let rows = session.results(&equipment.code);
    for row in &rows {
        ResultRepo::insert(&state.pool, row, Some(auth.user_id)).await?;
    }

    tracing::info!(
        equipment_id,
        equipment_code = %equipment.code,
        category = %input.category,
        rows = rows.len(),
        user_id = auth.user_id,
        "Checklist saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SaveChecklistResponse { saved: rows.len() },
        }),
    ))
}

/// GET /api/v1/equipment/{id}/results
pub async fn list_results(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let equipment = find_owned_equipment(&state, &auth, equipment_id).await?;
    let results = ResultRepo::list_for_equipment(&state.pool, &equipment.code).await?;
    Ok(Json(DataResponse { data: results }))
}
