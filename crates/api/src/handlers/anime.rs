//! Handlers for the anime resource.
//!
//! Authorization already happened in the route guard; the resolved caller
//! is read from the request extensions for audit logging only.

use anime_db::models::anime::AnimePayload;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody, ValidatedJson};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /animes
pub async fn list_animes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let animes = state.animes.find_all().await?;
    Ok(Json(animes))
}

/// GET /animes/{id}
pub async fn get_anime(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let anime = state.animes.find_by_id(id).await?;
    Ok(Json(anime))
}

/// POST /animes
///
/// Any `id` in the body is ignored; storage assigns one.
pub async fn create_anime(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<AnimePayload>,
) -> AppResult<impl IntoResponse> {
    let anime = state.animes.create(&payload.into_create()).await?;

    tracing::info!(
        anime_id = anime.id,
        user_id = user.user_id,
        user = %user.username,
        "Anime created"
    );

    Ok((StatusCode::CREATED, Json(anime)))
}

/// POST /animes/batch
///
/// Items are not validated up front; the service rejects the whole batch if
/// any stored item has an empty name.
pub async fn create_batch(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(payloads): JsonBody<Vec<AnimePayload>>,
) -> AppResult<impl IntoResponse> {
    let inputs: Vec<_> = payloads.into_iter().map(AnimePayload::into_create).collect();
    let animes = state.animes.create_all(&inputs).await?;

    tracing::info!(
        count = animes.len(),
        user_id = user.user_id,
        user = %user.username,
        "Anime batch created"
    );

    Ok((StatusCode::CREATED, Json(animes)))
}

/// PUT /animes/{id}
///
/// Full replacement keyed by the path id.
pub async fn update_anime(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<AnimePayload>,
) -> AppResult<impl IntoResponse> {
    state.animes.update(&payload.into_anime(id)).await?;

    tracing::info!(
        anime_id = id,
        user_id = user.user_id,
        user = %user.username,
        "Anime updated"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /animes/{id}
pub async fn delete_anime(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    state.animes.delete(id).await?;

    tracing::info!(
        anime_id = id,
        user_id = user.user_id,
        user = %user.username,
        "Anime deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
