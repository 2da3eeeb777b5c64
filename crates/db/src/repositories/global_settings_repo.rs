//! Repository for the singleton `global_settings` table.

use sqlx::PgPool;

use deckway_core::types::DbId;

use crate::models::global_settings::{CreateGlobalSettings, GlobalSettings, UpdateGlobalSettings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, company_name, logo_url, address, email, website, deleted_at, created_at, updated_at";

/// Provides access to the single active company-settings row.
pub struct GlobalSettingsRepo;

impl GlobalSettingsRepo {
    /// Fetch the active settings row, if one exists.
    pub async fn get(pool: &PgPool) -> Result<Option<GlobalSettings>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM global_settings \
             WHERE deleted_at IS NULL \
             ORDER BY id \
             LIMIT 1"
        );
        sqlx::query_as::<_, GlobalSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Insert the settings row, returning the created row.
    ///
    /// A partial unique index (`uq_global_settings_active`) backs the
    /// one-active-row rule; a concurrent second insert fails with a unique
    /// violation that the API layer maps to 409.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGlobalSettings,
    ) -> Result<GlobalSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO global_settings (company_name, logo_url, address, email, website) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GlobalSettings>(&query)
            .bind(&input.company_name)
            .bind(&input.logo_url)
            .bind(&input.address)
            .bind(&input.email)
            .bind(&input.website)
            .fetch_one(pool)
            .await
    }

    /// Update the settings row. Text fields fall back to their current
    /// values; `logo` distinguishes "leave alone" (`None`), "replace"
    /// (`Some(Some(url))`) and "remove" (`Some(None)`).
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGlobalSettings,
        logo: Option<Option<String>>,
    ) -> Result<Option<GlobalSettings>, sqlx::Error> {
        let query = format!(
            "UPDATE global_settings SET \
                company_name = COALESCE($2, company_name), \
                address = COALESCE($3, address), \
                email = COALESCE($4, email), \
                website = COALESCE($5, website), \
                logo_url = CASE WHEN $6 THEN $7 ELSE logo_url END, \
                updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GlobalSettings>(&query)
            .bind(id)
            .bind(&input.company_name)
            .bind(&input.address)
            .bind(&input.email)
            .bind(&input.website)
            .bind(logo.is_some())
            .bind(logo.flatten())
            .fetch_optional(pool)
            .await
    }
}
