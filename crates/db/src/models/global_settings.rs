//! Global company-settings model and DTOs. At most one active row exists.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use deckway_core::types::{DbId, Timestamp};

/// The singleton row from the `global_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub id: DbId,
    pub company_name: Option<String>,
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the settings row. `logo_url` is filled by the handler
/// after the logo upload, never taken from the client directly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGlobalSettings {
    pub company_name: Option<String>,
    #[serde(skip)]
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

/// DTO for updating the settings row. Text fields fall back to their current
/// values; the logo is patched separately since "absent" and "remove" differ.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGlobalSettings {
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}
