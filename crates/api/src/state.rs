use std::sync::Arc;

use anime_db::store::AppUserStore;

use crate::config::ServerConfig;
use crate::services::anime::AnimeService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Business rules over the anime store.
    pub animes: AnimeService,
    /// Credential lookup for HTTP Basic authentication.
    pub users: Arc<dyn AppUserStore>,
}
