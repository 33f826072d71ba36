//! Route definitions for the `/checklists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::checklist;
use crate::state::AppState;

/// Routes mounted at `/checklists`. Requires authentication.
///
/// ```text
/// GET /{category} -> checklist template with default selections
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{category}", get(checklist::get_checklist_template))
}
