//! Integration tests for the slide ordering engine.
//!
//! Covers `next_order`, the atomic reorder batch, and the deliberate
//! looseness of explicit order values outside the reorder path.

use sqlx::PgPool;

use deckway_core::types::DbId;
use deckway_db::models::project::CreateProject;
use deckway_db::models::slide::CreateSlide;
use deckway_db::repositories::{ProjectRepo, SlideRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_project(pool: &PgPool, title: &str) -> DbId {
    ProjectRepo::create(
        pool,
        &CreateProject {
            title: title.to_string(),
            description: None,
            version: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn new_slide(pool: &PgPool, project_id: DbId, order: i32, text: &str) -> DbId {
    SlideRepo::create(
        pool,
        project_id,
        order,
        &CreateSlide {
            sort_order: None,
            text_content: Some(text.to_string()),
            media_url: None,
            media_type: None,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// next_order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_next_order_on_empty_project_is_zero(pool: PgPool) {
    let project_id = new_project(&pool, "Empty").await;
    assert_eq!(SlideRepo::next_order(&pool, project_id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_next_order_appends_after_max(pool: PgPool) {
    let project_id = new_project(&pool, "Deck").await;
    for order in 0..3 {
        new_slide(&pool, project_id, order, "slide").await;
    }
    assert_eq!(SlideRepo::next_order(&pool, project_id).await.unwrap(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_next_order_ignores_deleted_slides(pool: PgPool) {
    let project_id = new_project(&pool, "Deck").await;
    new_slide(&pool, project_id, 0, "keep").await;
    let deleted = new_slide(&pool, project_id, 1, "drop").await;
    SlideRepo::soft_delete(&pool, deleted).await.unwrap();

    assert_eq!(SlideRepo::next_order(&pool, project_id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_order_may_leave_gaps(pool: PgPool) {
    let project_id = new_project(&pool, "Gappy").await;
    new_slide(&pool, project_id, 5, "floater").await;

    // Explicit orders are trusted as-is; the next append lands after the gap.
    assert_eq!(SlideRepo::next_order(&pool, project_id).await.unwrap(), 6);
}

// ---------------------------------------------------------------------------
// reorder
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_applies_submitted_sequence(pool: PgPool) {
    let project_id = new_project(&pool, "Deck").await;
    let a = new_slide(&pool, project_id, 0, "A").await;
    let b = new_slide(&pool, project_id, 1, "B").await;
    let c = new_slide(&pool, project_id, 2, "C").await;

    SlideRepo::reorder(&pool, project_id, &[c, a, b]).await.unwrap();

    let slides = SlideRepo::list_by_project(&pool, project_id).await.unwrap();
    let ids: Vec<DbId> = slides.iter().map(|s| s.id).collect();
    let orders: Vec<i32> = slides.iter().map(|s| s.sort_order).collect();
    assert_eq!(ids, vec![c, a, b]);
    assert_eq!(orders, vec![0, 1, 2]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_leaves_other_projects_untouched(pool: PgPool) {
    let project_id = new_project(&pool, "Mine").await;
    let other_project = new_project(&pool, "Theirs").await;
    let mine = new_slide(&pool, project_id, 0, "mine").await;
    let theirs = new_slide(&pool, other_project, 0, "theirs").await;

    // A foreign ID in the batch silently matches no row of this project; the
    // set check at the service layer is what rejects such requests up front.
    SlideRepo::reorder(&pool, project_id, &[mine]).await.unwrap();

    let other = SlideRepo::find_by_id(&pool, theirs).await.unwrap().unwrap();
    assert_eq!(other.sort_order, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_skips_soft_deleted_slides(pool: PgPool) {
    let project_id = new_project(&pool, "Deck").await;
    let a = new_slide(&pool, project_id, 0, "A").await;
    let b = new_slide(&pool, project_id, 1, "B").await;
    SlideRepo::soft_delete(&pool, b).await.unwrap();

    SlideRepo::reorder(&pool, project_id, &[a]).await.unwrap();

    let active = SlideRepo::list_by_project(&pool, project_id).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].sort_order, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_active_ids_matches_active_set(pool: PgPool) {
    let project_id = new_project(&pool, "Deck").await;
    let a = new_slide(&pool, project_id, 0, "A").await;
    let b = new_slide(&pool, project_id, 1, "B").await;
    SlideRepo::soft_delete(&pool, a).await.unwrap();

    let ids = SlideRepo::list_active_ids(&pool, project_id).await.unwrap();
    assert_eq!(ids, vec![b]);
}
