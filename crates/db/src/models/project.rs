//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use deckway_core::types::{DbId, Timestamp};

use crate::models::slide::Slide;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with its active slides eager-loaded in presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithSlides {
    #[serde(flatten)]
    pub project: Project,
    pub slides: Vec<Slide>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
}
