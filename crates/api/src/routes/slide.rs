//! Route definitions for the `/slides` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::slide;
use crate::state::AppState;

/// Routes mounted at `/slides`.
///
/// ```text
/// POST   /project/{project_id}           -> create
/// GET    /project/{project_id}           -> list_by_project
/// PATCH  /project/{project_id}/reorder   -> reorder
/// GET    /{id}                           -> get_by_id
/// PUT    /{id}                           -> update
/// DELETE /{id}                           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/project/{project_id}",
            get(slide::list_by_project).post(slide::create),
        )
        .route("/project/{project_id}/reorder", patch(slide::reorder))
        .route(
            "/{id}",
            get(slide::get_by_id)
                .put(slide::update)
                .delete(slide::delete),
        )
}
