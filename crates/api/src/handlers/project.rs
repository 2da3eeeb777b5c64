//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use deckway_core::error::CoreError;
use deckway_core::types::DbId;
use deckway_db::models::project::{CreateProject, Project, ProjectWithSlides, UpdateProject};
use deckway_db::repositories::{ProjectRepo, SlideRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".to_string()).into());
    }
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok(DataResponse::created(project))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Project>>>)> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(DataResponse::ok(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(DataResponse::ok(project))
}

/// GET /api/v1/projects/{id}/presentation
///
/// The project with its active slides eager-loaded in presentation order,
/// ready for the kiosk viewer.
pub async fn presentation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectWithSlides>>)> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let slides = SlideRepo::list_by_project(&state.pool, id).await?;
    Ok(DataResponse::ok(ProjectWithSlides { project, slides }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    if input.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(CoreError::Validation("Title must not be empty".to_string()).into());
    }
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(DataResponse::ok(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Soft-deletes the project, then cascades to its active slides. The two
/// statements do not share a transaction; a crash in between leaves slides
/// active under a deleted project.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    let cascaded = SlideRepo::soft_delete_by_project(&state.pool, id).await?;
    tracing::info!(project_id = id, cascaded, "Project soft-deleted");

    Ok(StatusCode::NO_CONTENT)
}
