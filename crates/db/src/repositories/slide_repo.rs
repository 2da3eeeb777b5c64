//! Repository for the `slides` table, including the ordering engine.
//!
//! Within a project, active slides carry a zero-based `sort_order`. The
//! [`SlideRepo::reorder`] batch is the only path that guarantees the range
//! stays dense; explicit orders on create/update are trusted as-is.

use sqlx::PgPool;

use deckway_core::ordering;
use deckway_core::types::DbId;

use crate::models::slide::{CreateSlide, Slide, UpdateSlide};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, sort_order, text_content, media_url, media_type, \
    deleted_at, created_at, updated_at";

/// Provides CRUD and ordering operations for slides.
pub struct SlideRepo;

impl SlideRepo {
    /// Insert a new slide at the given position, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        sort_order: i32,
        input: &CreateSlide,
    ) -> Result<Slide, sqlx::Error> {
        let query = format!(
            "INSERT INTO slides (project_id, sort_order, text_content, media_url, media_type) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(project_id)
            .bind(sort_order)
            .bind(&input.text_content)
            .bind(&input.media_url)
            .bind(input.media_type)
            .fetch_one(pool)
            .await
    }

    /// Find a slide by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Slide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slides WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all active slides for a project in presentation order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Slide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM slides \
             WHERE project_id = $1 AND deleted_at IS NULL \
             ORDER BY sort_order ASC"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// IDs of all active slides in a project, unordered.
    pub async fn list_active_ids(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM slides WHERE project_id = $1 AND deleted_at IS NULL",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Position for a slide appended to the project: one past the current
    /// maximum active `sort_order`, or `0` for an empty project.
    pub async fn next_order(pool: &PgPool, project_id: DbId) -> Result<i32, sqlx::Error> {
        let max: Option<i32> = sqlx::query_scalar(
            "SELECT MAX(sort_order) FROM slides WHERE project_id = $1 AND deleted_at IS NULL",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await?;
        Ok(ordering::next_order(max))
    }

    /// Assign each slide its zero-based position in `slide_ids` as a single
    /// atomic batch.
    ///
    /// Callers must have validated the ID set against the project's active
    /// slides first (see `deckway_core::ordering::validate_reorder_set`); the
    /// statement itself only touches active rows of the given project.
    pub async fn reorder(
        pool: &PgPool,
        project_id: DbId,
        slide_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let positions: Vec<i32> = (0..slide_ids.len() as i32).collect();
        sqlx::query(
            "UPDATE slides SET sort_order = v.sort_order, updated_at = NOW() \
             FROM (SELECT UNNEST($2::BIGINT[]) AS id, UNNEST($3::INT[]) AS sort_order) v \
             WHERE slides.id = v.id \
               AND slides.project_id = $1 \
               AND slides.deleted_at IS NULL",
        )
        .bind(project_id)
        .bind(slide_ids.to_vec())
        .bind(positions)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Update a slide. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSlide,
    ) -> Result<Option<Slide>, sqlx::Error> {
        let query = format!(
            "UPDATE slides SET \
                sort_order = COALESCE($2, sort_order), \
                text_content = COALESCE($3, text_content), \
                media_url = COALESCE($4, media_url), \
                media_type = COALESCE($5, media_type), \
                updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .bind(input.sort_order)
            .bind(&input.text_content)
            .bind(&input.media_url)
            .bind(input.media_type)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a slide by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE slides SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete every active slide of a project. Returns the number of
    /// slides affected. Used by the project-delete cascade.
    pub async fn soft_delete_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE slides SET deleted_at = NOW() WHERE project_id = $1 AND deleted_at IS NULL",
        )
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Restore a soft-deleted slide. Returns `true` if a row was restored.
    /// Not reachable from any endpoint.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE slides SET deleted_at = NULL WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
