//! Anime entity model and DTOs.

use anime_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `anime` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Anime {
    pub id: DbId,
    pub name: String,
}

/// DTO for inserting a new anime. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAnime {
    pub name: String,
}

/// Request body accepted by the create, batch and update endpoints.
///
/// Any `id` in the body is ignored: creates get a storage-assigned id and
/// updates take the id from the path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AnimePayload {
    #[validate(
        required(message = "The name of this anime cannot be empty"),
        length(min = 1, message = "The name of this anime cannot be empty")
    )]
    pub name: Option<String>,
}

impl AnimePayload {
    /// Convert into an insert DTO. A missing name becomes an empty one so the
    /// persisted-row check can reject it.
    pub fn into_create(self) -> CreateAnime {
        CreateAnime {
            name: self.name.unwrap_or_default(),
        }
    }

    /// Convert into a full replacement of the record identified by `id`.
    pub fn into_anime(self, id: DbId) -> Anime {
        Anime {
            id,
            name: self.name.unwrap_or_default(),
        }
    }
}
