//! Anime resource service.
//!
//! Maps absent rows to `NotFound`, checks batch results and confirms
//! existence before replacing or removing a record. Stateless apart from the
//! store handle.

use std::sync::Arc;

use anime_core::error::CoreError;
use anime_core::naming::ensure_name_present;
use anime_core::types::DbId;
use anime_db::models::anime::{Anime, CreateAnime};
use anime_db::store::AnimeStore;

use crate::error::AppResult;

#[derive(Clone)]
pub struct AnimeService {
    store: Arc<dyn AnimeStore>,
}

impl AnimeService {
    pub fn new(store: Arc<dyn AnimeStore>) -> Self {
        Self { store }
    }

    /// Every stored anime, in storage order.
    pub async fn find_all(&self) -> AppResult<Vec<Anime>> {
        Ok(self.store.list().await?)
    }

    pub async fn find_by_id(&self, id: DbId) -> AppResult<Anime> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Persist a new anime. Name validation happens at the HTTP boundary.
    pub async fn create(&self, input: &CreateAnime) -> AppResult<Anime> {
        Ok(self.store.create(input).await?)
    }

    /// Persist a batch, rejecting it if any stored row came back without a
    /// name. The batch is atomic: a rejection keeps none of the items.
    pub async fn create_all(&self, inputs: &[CreateAnime]) -> AppResult<Vec<Anime>> {
        Ok(self.store.create_all(inputs, require_name).await?)
    }

    /// Replace an existing anime. Fails with `NotFound` if `anime.id` is absent.
    pub async fn update(&self, anime: &Anime) -> AppResult<()> {
        self.find_by_id(anime.id).await?;
        self.store
            .update(anime)
            .await?
            .ok_or_else(|| not_found(anime.id))?;
        Ok(())
    }

    /// Remove an existing anime. Fails with `NotFound` if `id` is absent.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let anime = self.find_by_id(id).await?;
        if !self.store.delete(anime.id).await? {
            // Removed concurrently between the lookup and the delete.
            return Err(not_found(id).into());
        }
        Ok(())
    }
}

fn require_name(anime: &Anime) -> Result<(), CoreError> {
    ensure_name_present(&anime.name)
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "Anime", id }
}
