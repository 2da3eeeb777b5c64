//! Route definitions.
//!
//! Each resource module exposes a `router()` mounted under `/api/v1`;
//! `health` is mounted at the root.

pub mod global_settings;
pub mod health;
pub mod project;
pub mod slide;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/presentation                      composed slideshow (GET)
///
/// /slides/project/{project_id}                     list, create
/// /slides/project/{project_id}/reorder             reorder batch (PATCH)
/// /slides/{id}                                     get, update, delete
///
/// /global-settings                                 get, create, update (multipart)
///
/// /upload                                          buffered upload (POST multipart)
/// /upload/presign                                  presigned PUT URL (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/slides", slide::router())
        .nest("/global-settings", global_settings::router())
        .nest("/upload", upload::router())
}
