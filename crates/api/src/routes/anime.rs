//! Route definitions for the anime resource.

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::anime;
use crate::middleware::rbac::enforce_route_roles;
use crate::state::AppState;

/// Anime routes, guarded by the route→role table.
///
/// ```text
/// GET    /animes          -> list_animes     (ADMIN)
/// POST   /animes          -> create_anime    (ADMIN)
/// POST   /animes/batch    -> create_batch    (ADMIN)
/// GET    /animes/{id}     -> get_anime       (USER)
/// PUT    /animes/{id}     -> update_anime    (ADMIN)
/// DELETE /animes/{id}     -> delete_anime    (ADMIN)
/// ```
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/animes", get(anime::list_animes).post(anime::create_anime))
        .route("/animes/batch", post(anime::create_batch))
        .route(
            "/animes/{id}",
            get(anime::get_anime)
                .put(anime::update_anime)
                .delete(anime::delete_anime),
        )
        .route_layer(from_fn_with_state(state, enforce_route_roles))
}
