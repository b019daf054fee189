//! Storage seams used by the HTTP layer.
//!
//! The service talks to these traits rather than to `PgPool` directly so the
//! backing store can be swapped (Postgres in production, in-memory doubles in
//! the API tests).

use anime_core::error::CoreError;
use anime_core::types::DbId;
use async_trait::async_trait;

use crate::models::anime::{Anime, CreateAnime};
use crate::models::app_user::AppUser;

/// Check applied to every row a batch insert produced, before commit.
pub type RowCheck = fn(&Anime) -> Result<(), CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A [`RowCheck`] refused a row; nothing from the batch was kept.
    #[error(transparent)]
    Rejected(CoreError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD access to the `anime` table. Performs no validation of its own.
#[async_trait]
pub trait AnimeStore: Send + Sync {
    /// Every stored anime in storage order.
    async fn list(&self) -> StoreResult<Vec<Anime>>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Anime>>;

    /// Insert a new anime, returning the stored row.
    async fn create(&self, input: &CreateAnime) -> StoreResult<Anime>;

    /// Insert all items atomically.
    ///
    /// Each stored row is handed to `check` in insertion order; the first
    /// rejection discards the whole batch and is returned as
    /// [`StoreError::Rejected`].
    async fn create_all(&self, inputs: &[CreateAnime], check: RowCheck) -> StoreResult<Vec<Anime>>;

    /// Replace the row with `anime.id`. Returns `None` if no such row exists.
    async fn update(&self, anime: &Anime) -> StoreResult<Option<Anime>>;

    /// Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;
}

/// Read access to `app_user`, used only at authentication time.
#[async_trait]
pub trait AppUserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<AppUser>>;
}
