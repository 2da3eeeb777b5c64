//! Slide entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use deckway_core::types::{DbId, Timestamp};

/// Kind of media a slide carries. Stored as the PostgreSQL enum `media_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "media_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// A row from the `slides` table.
///
/// `sort_order` is the slide's zero-based position within its project and is
/// exposed as `order` on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: DbId,
    pub project_id: DbId,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub text_content: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new slide. The project comes from the URL path; when
/// `order` is omitted the slide is appended after the project's current
/// maximum.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlide {
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub text_content: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
}

/// DTO for updating an existing slide. All fields are optional; an explicit
/// `order` is trusted as-is and not reconciled with sibling slides.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlide {
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub text_content: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
}
