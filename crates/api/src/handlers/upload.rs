//! Handlers for the `/upload` resource.
//!
//! Two upload modes: buffered multipart through the service (validated
//! here), or a presigned PUT URL for a direct client upload (content type
//! is whatever the client declared).

use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use deckway_core::media;
use deckway_db::models::slide::MediaType;

use crate::error::{AppError, AppResult};
use crate::multipart::parse_multipart;
use crate::response::DataResponse;
use crate::state::AppState;

const MEDIA_CATEGORY: &str = "slides/media";

/// Response payload for the buffered upload endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub url: String,
    pub media_type: Option<MediaType>,
}

/// Request body for POST /upload/presign.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub content_type: String,
}

/// Response payload for the presign endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignResult {
    pub presigned_url: String,
    pub public_url: String,
    pub media_type: Option<MediaType>,
}

/// POST /api/v1/upload (multipart, `file` field)
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResult>>)> {
    let form = parse_multipart(multipart, "file").await?;
    let file = form
        .file
        .ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

    media::validate_file(file.size(), &file.content_type, &media::MEDIA_FILE_VALIDATION)?;

    let key = media::object_key(MEDIA_CATEGORY, &file.filename);
    let uploaded = state
        .storage
        .upload_buffer(&key, file.bytes, &file.content_type)
        .await?;
    tracing::info!(key = %uploaded.key, "Media uploaded");

    Ok(DataResponse::created(UploadResult {
        url: uploaded.url,
        media_type: classify(&file.content_type),
    }))
}

/// POST /api/v1/upload/presign
///
/// Returns a short-lived signed PUT URL plus the public URL the object will
/// be readable at. The byte transfer bypasses the service entirely.
pub async fn presign(
    State(state): State<AppState>,
    Json(input): Json<PresignRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<PresignResult>>)> {
    if input.filename.is_empty() || input.content_type.is_empty() {
        return Err(AppError::BadRequest(
            "filename and contentType are required".to_string(),
        ));
    }

    let key = media::object_key(MEDIA_CATEGORY, &input.filename);
    let presigned = state
        .storage
        .presign_put(
            &key,
            &input.content_type,
            Duration::from_secs(state.config.upload_presign_expiry_secs),
        )
        .await?;

    Ok(DataResponse::ok(PresignResult {
        presigned_url: presigned.upload_url,
        public_url: presigned.public_url,
        media_type: classify(&input.content_type),
    }))
}

fn classify(content_type: &str) -> Option<MediaType> {
    if media::is_image_mime(content_type) {
        Some(MediaType::Image)
    } else if media::is_video_mime(content_type) {
        Some(MediaType::Video)
    } else {
        None
    }
}
