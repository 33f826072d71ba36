pub mod auth;
pub mod checklists;
pub mod equipment;
pub mod health;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /tasks                           list assigned tasks
/// /tasks/{id}                      task detail
/// /tasks/{id}/status               update status (PUT)
/// /tasks/{id}/equipment            equipment on a task
///
/// /equipment/{id}                  equipment detail
/// /equipment/{id}/results          save checklist (POST), list results (GET)
/// /equipment/{id}/photos           record photo (POST), list photos (GET)
/// /equipment/{id}/finalization     finalize (POST), get record (GET)
///
/// /checklists/{category}           checklist template with defaults
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tasks", tasks::router())
        .nest("/equipment", equipment::router())
        .nest("/checklists", checklists::router())
}
