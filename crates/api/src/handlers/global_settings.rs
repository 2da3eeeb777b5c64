//! Handlers for the `/global-settings` singleton resource.
//!
//! Create and update accept multipart bodies so the company logo can ride
//! along with the text fields. Replaced or removed logo objects are deleted
//! from the bucket best-effort: failures are logged, never surfaced.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

use deckway_core::error::CoreError;
use deckway_core::media;
use deckway_db::models::global_settings::{
    CreateGlobalSettings, GlobalSettings, UpdateGlobalSettings,
};
use deckway_db::repositories::GlobalSettingsRepo;

use crate::error::{AppError, AppResult};
use crate::multipart::{parse_multipart, MultipartForm, UploadedFile};
use crate::response::DataResponse;
use crate::state::AppState;

const LOGO_CATEGORY: &str = "global-settings/logos";

/// GET /api/v1/global-settings
pub async fn get(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<GlobalSettings>>)> {
    let settings = GlobalSettingsRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Global settings not found".to_string()))?;
    Ok(DataResponse::ok(settings))
}

/// POST /api/v1/global-settings (multipart, optional `logo` file)
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<GlobalSettings>>)> {
    let form = parse_multipart(multipart, "logo").await?;

    if GlobalSettingsRepo::get(&state.pool).await?.is_some() {
        return Err(CoreError::Conflict("Global settings already exists".to_string()).into());
    }

    let mut input = CreateGlobalSettings {
        company_name: form.text("companyName"),
        logo_url: None,
        address: form.text("address"),
        email: form.text("email"),
        website: form.text("website"),
    };

    if let Some(file) = &form.file {
        input.logo_url = Some(upload_logo(&state, file).await?);
    }

    let settings = GlobalSettingsRepo::create(&state.pool, &input).await?;
    Ok(DataResponse::created(settings))
}

/// PATCH /api/v1/global-settings (multipart, optional `logo` file or
/// `deleteLogo=true` flag)
pub async fn update(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<GlobalSettings>>)> {
    let form = parse_multipart(multipart, "logo").await?;

    let existing = GlobalSettingsRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Global settings not found".to_string()))?;

    let logo = resolve_logo_patch(&state, &form, existing.logo_url.as_deref()).await?;

    let input = UpdateGlobalSettings {
        company_name: form.text("companyName"),
        address: form.text("address"),
        email: form.text("email"),
        website: form.text("website"),
    };

    let settings = GlobalSettingsRepo::update(&state.pool, existing.id, &input, logo)
        .await?
        .ok_or_else(|| AppError::NotFound("Global settings not found".to_string()))?;
    Ok(DataResponse::ok(settings))
}

/// Work out what happens to the logo: `None` leaves it alone,
/// `Some(Some(url))` replaces it, `Some(None)` removes it.
async fn resolve_logo_patch(
    state: &AppState,
    form: &MultipartForm,
    current_logo_url: Option<&str>,
) -> AppResult<Option<Option<String>>> {
    if let Some(file) = &form.file {
        if let Some(old_url) = current_logo_url {
            delete_best_effort(state, old_url).await;
        }
        return Ok(Some(Some(upload_logo(state, file).await?)));
    }

    if form.flag("deleteLogo") {
        if let Some(old_url) = current_logo_url {
            delete_best_effort(state, old_url).await;
        }
        return Ok(Some(None));
    }

    Ok(None)
}

async fn upload_logo(state: &AppState, file: &UploadedFile) -> AppResult<String> {
    media::validate_file(file.size(), &file.content_type, &media::IMAGE_FILE_VALIDATION)?;

    let key = media::object_key(LOGO_CATEGORY, &file.filename);
    let uploaded = state
        .storage
        .upload_buffer(&key, file.bytes.clone(), &file.content_type)
        .await?;
    Ok(uploaded.url)
}

async fn delete_best_effort(state: &AppState, url: &str) {
    if let Err(err) = state.storage.delete(url).await {
        tracing::warn!(error = %err, url, "Failed to delete replaced logo object");
    }
}
