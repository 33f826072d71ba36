//! Route definitions for the `/tasks` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`. All require authentication.
///
/// ```text
/// GET /               -> list assigned tasks
/// GET /{id}           -> task detail
/// PUT /{id}/status    -> update task status
/// GET /{id}/equipment -> equipment on the task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks))
        .route("/{id}", get(tasks::get_task))
        .route("/{id}/status", put(tasks::update_task_status))
        .route("/{id}/equipment", get(tasks::list_task_equipment))
}
