//! Repository for the `app_user` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::app_user::AppUser;
use crate::store::{AppUserStore, StoreResult};

const COLUMNS: &str = "id, name, username, password, authorities";

/// Read-only lookups of credential records.
#[derive(Clone)]
pub struct AppUserRepo {
    pool: PgPool,
}

impl AppUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppUserStore for AppUserRepo {
    /// Find a user by username (case-sensitive).
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<AppUser>> {
        let query = format!("SELECT {COLUMNS} FROM app_user WHERE username = $1");
        let row = sqlx::query_as::<_, AppUser>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
