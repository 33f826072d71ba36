//! Route definitions for the `/equipment` resource and its sub-resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{checklist, equipment, finalization, photos};
use crate::state::AppState;

/// Routes mounted at `/equipment`. All require authentication.
///
/// ```text
/// GET  /{id}               -> equipment detail
/// POST /{id}/results       -> save a completed checklist
/// GET  /{id}/results       -> list recorded results
/// POST /{id}/photos        -> record a photo
/// GET  /{id}/photos        -> list photos
/// POST /{id}/finalization  -> finalize the equipment
/// GET  /{id}/finalization  -> finalization record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(equipment::get_equipment))
        .route(
            "/{id}/results",
            get(checklist::list_results).post(checklist::save_checklist),
        )
        .route(
            "/{id}/photos",
            get(photos::list_photos).post(photos::add_photo),
        )
        .route(
            "/{id}/finalization",
            get(finalization::get_finalization).post(finalization::finalize_equipment),
        )
}
