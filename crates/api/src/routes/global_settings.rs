//! Route definitions for the `/global-settings` singleton.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use deckway_core::media;

use crate::handlers::global_settings;
use crate::state::AppState;

/// Routes mounted at `/global-settings`.
///
/// ```text
/// GET    /   -> get
/// POST   /   -> create (multipart, optional logo)
/// PATCH  /   -> update (multipart, optional logo / deleteLogo)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(global_settings::get)
                .post(global_settings::create)
                .patch(global_settings::update),
        )
        // Logo uploads are image-sized; leave headroom for the text fields
        // and multipart framing.
        .layer(DefaultBodyLimit::max(
            media::IMAGE_FILE_VALIDATION.max_bytes + 1024 * 1024,
        ))
}
