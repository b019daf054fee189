//! Repository for the `anime` table.

use anime_core::types::DbId;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::anime::{Anime, CreateAnime};
use crate::store::{AnimeStore, RowCheck, StoreError, StoreResult};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for anime.
#[derive(Clone)]
pub struct AnimeRepo {
    pool: PgPool,
}

impl AnimeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnimeStore for AnimeRepo {
    async fn list(&self) -> StoreResult<Vec<Anime>> {
        let query = format!("SELECT {COLUMNS} FROM anime ORDER BY id ASC");
        let rows = sqlx::query_as::<_, Anime>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Anime>> {
        let query = format!("SELECT {COLUMNS} FROM anime WHERE id = $1");
        let row = sqlx::query_as::<_, Anime>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: &CreateAnime) -> StoreResult<Anime> {
        let query = format!("INSERT INTO anime (name) VALUES ($1) RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, Anime>(&query)
            .bind(&input.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create_all(&self, inputs: &[CreateAnime], check: RowCheck) -> StoreResult<Vec<Anime>> {
        let query = format!("INSERT INTO anime (name) VALUES ($1) RETURNING {COLUMNS}");
        let mut tx = self.pool.begin().await?;
        let mut stored = Vec::with_capacity(inputs.len());

        for input in inputs {
            let row = sqlx::query_as::<_, Anime>(&query)
                .bind(&input.name)
                .fetch_one(&mut *tx)
                .await?;

            if let Err(rejection) = check(&row) {
                tx.rollback().await?;
                tracing::debug!(
                    rejected_id = row.id,
                    inserted = stored.len(),
                    "Batch insert rolled back",
                );
                return Err(StoreError::Rejected(rejection));
            }
            stored.push(row);
        }

        tx.commit().await?;
        Ok(stored)
    }

    async fn update(&self, anime: &Anime) -> StoreResult<Option<Anime>> {
        let query = format!("UPDATE anime SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, Anime>(&query)
            .bind(anime.id)
            .bind(&anime.name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM anime WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
