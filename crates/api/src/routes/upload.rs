//! Route definitions for the `/upload` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use deckway_core::media;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST   /           -> upload (multipart, buffered)
/// POST   /presign    -> presign (JSON, direct-to-bucket)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload))
        .route("/presign", post(upload::presign))
        // Buffered uploads may carry full-size videos; leave headroom for
        // multipart framing.
        .layer(DefaultBodyLimit::max(
            media::MEDIA_FILE_VALIDATION.max_bytes + 1024 * 1024,
        ))
}
