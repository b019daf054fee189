//! Repository tests against a real PostgreSQL database.
//!
//! `#[sqlx::test]` creates a fresh database per test on the server named by
//! `DATABASE_URL` and applies the workspace migrations to it.

use anime_core::error::CoreError;
use anime_core::naming::ensure_name_present;
use anime_db::models::anime::{Anime, CreateAnime};
use anime_db::repositories::{AnimeRepo, AppUserRepo};
use anime_db::store::{AnimeStore, AppUserStore, StoreError};
use assert_matches::assert_matches;
use sqlx::PgPool;

fn require_name(anime: &Anime) -> Result<(), CoreError> {
    ensure_name_present(&anime.name)
}

fn new_anime(name: &str) -> CreateAnime {
    CreateAnime {
        name: name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Single-row CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_then_find(pool: PgPool) {
    let repo = AnimeRepo::new(pool);

    let created = repo.create(&new_anime("Naruto")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Naruto");

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_returns_rows_in_id_order(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    let first = repo.create(&new_anime("Bleach")).await.unwrap();
    let second = repo.create(&new_anime("One Piece")).await.unwrap();

    let all = repo.list().await.unwrap();
    assert_eq!(all, vec![first, second]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_name(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    let created = repo.create(&new_anime("Naruto")).await.unwrap();

    let replacement = Anime {
        id: created.id,
        name: "Naruto Shippuden".to_string(),
    };
    let updated = repo.update(&replacement).await.unwrap();
    assert_eq!(updated, Some(replacement));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    let ghost = Anime {
        id: 9_999,
        name: "Ghost".to_string(),
    };
    assert_eq!(repo.update(&ghost).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_reports_whether_a_row_went_away(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    let created = repo.create(&new_anime("Naruto")).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
}

// ---------------------------------------------------------------------------
// Batch insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_all_commits_every_row(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    let stored = repo
        .create_all(&[new_anime("Naruto"), new_anime("Bleach")], require_name)
        .await
        .unwrap();

    assert_eq!(stored.len(), 2);
    assert_eq!(repo.list().await.unwrap(), stored);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_all_rolls_back_on_rejection(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    let result = repo
        .create_all(&[new_anime("Naruto"), new_anime("")], require_name)
        .await;

    assert_matches!(result, Err(StoreError::Rejected(CoreError::Validation(_))));
    assert!(repo.list().await.unwrap().is_empty(), "batch must be all-or-nothing");
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_find_user_by_username(pool: PgPool) {
    sqlx::query(
        "INSERT INTO app_user (name, username, password, authorities)
         VALUES ('Admin', 'malves', 'not-a-real-hash', 'ROLE_ADMIN,ROLE_USER')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let repo = AppUserRepo::new(pool);
    let user = repo.find_by_username("malves").await.unwrap().unwrap();
    assert_eq!(user.name, "Admin");
    assert_eq!(user.roles(), vec!["ADMIN".to_string(), "USER".to_string()]);

    assert!(repo.find_by_username("MALVES").await.unwrap().is_none());
}
