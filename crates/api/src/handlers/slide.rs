//! Handlers for the `/slides` resource.
//!
//! Creation and explicit updates trust a supplied `order` value as-is; only
//! the reorder endpoint guarantees the project's active slides end up with
//! dense zero-based positions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use deckway_core::error::CoreError;
use deckway_core::ordering;
use deckway_core::types::DbId;
use deckway_db::models::slide::{CreateSlide, Slide, UpdateSlide};
use deckway_db::repositories::{ProjectRepo, SlideRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for PATCH /slides/project/{project_id}/reorder.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSlides {
    pub slide_ids: Vec<DbId>,
}

/// POST /api/v1/slides/project/{project_id}
///
/// When `order` is omitted the slide is appended after the project's current
/// maximum.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateSlide>,
) -> AppResult<(StatusCode, Json<DataResponse<Slide>>)> {
    ensure_project_exists(&state, project_id).await?;

    if input.sort_order.is_some_and(|o| o < 0) {
        return Err(CoreError::Validation("Order must be >= 0".to_string()).into());
    }

    let sort_order = match input.sort_order {
        Some(order) => order,
        None => SlideRepo::next_order(&state.pool, project_id).await?,
    };

    let slide = SlideRepo::create(&state.pool, project_id, sort_order, &input).await?;
    Ok(DataResponse::created(slide))
}

/// GET /api/v1/slides/project/{project_id}
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Slide>>>)> {
    let slides = SlideRepo::list_by_project(&state.pool, project_id).await?;
    Ok(DataResponse::ok(slides))
}

/// PATCH /api/v1/slides/project/{project_id}/reorder
///
/// The submitted IDs must be exactly the project's active slide set; each
/// slide takes its zero-based position in the list, applied as one batch.
/// A rejected request changes nothing.
pub async fn reorder(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<ReorderSlides>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Slide>>>)> {
    ensure_project_exists(&state, project_id).await?;

    let active_ids = SlideRepo::list_active_ids(&state.pool, project_id).await?;
    ordering::validate_reorder_set(&input.slide_ids, &active_ids)?;

    SlideRepo::reorder(&state.pool, project_id, &input.slide_ids).await?;
    tracing::info!(
        project_id,
        slides = input.slide_ids.len(),
        "Slides reordered"
    );

    let slides = SlideRepo::list_by_project(&state.pool, project_id).await?;
    Ok(DataResponse::ok(slides))
}

/// GET /api/v1/slides/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<Slide>>)> {
    let slide = SlideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Slide", id }))?;
    Ok(DataResponse::ok(slide))
}

/// PUT /api/v1/slides/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSlide>,
) -> AppResult<(StatusCode, Json<DataResponse<Slide>>)> {
    if input.sort_order.is_some_and(|o| o < 0) {
        return Err(CoreError::Validation("Order must be >= 0".to_string()).into());
    }
    let slide = SlideRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Slide", id }))?;
    Ok(DataResponse::ok(slide))
}

/// DELETE /api/v1/slides/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SlideRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Slide", id }))
    }
}

async fn ensure_project_exists(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(())
}
