#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use anime_api::auth::basic::encode_basic_header;
use anime_api::auth::password::hash_password;
use anime_api::config::{LogFormat, ServerConfig};
use anime_api::router::build_app_router;
use anime_api::services::anime::AnimeService;
use anime_api::state::AppState;
use anime_core::types::DbId;
use anime_db::models::anime::{Anime, CreateAnime};
use anime_db::models::app_user::AppUser;
use anime_db::store::{AnimeStore, AppUserStore, RowCheck, StoreError, StoreResult};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const PASSWORD: &str = "devdojo";
pub const ADMIN: (&str, &str) = ("malves", PASSWORD);
pub const USER: (&str, &str) = ("user", PASSWORD);

// ---------------------------------------------------------------------------
// In-memory stores
// ---------------------------------------------------------------------------

#[derive(Default)]
struct AnimeTable {
    rows: BTreeMap<DbId, Anime>,
    next_id: DbId,
}

impl AnimeTable {
    fn insert(&mut self, input: &CreateAnime) -> Anime {
        self.next_id += 1;
        let anime = Anime {
            id: self.next_id,
            name: input.name.clone(),
        };
        self.rows.insert(anime.id, anime.clone());
        anime
    }
}

/// `AnimeStore` backed by a map; a batch works on a copy and only replaces
/// the table once every row passed its check.
#[derive(Default)]
pub struct MemoryAnimeStore {
    table: Mutex<AnimeTable>,
}

impl MemoryAnimeStore {
    pub fn snapshot(&self) -> Vec<Anime> {
        self.table.lock().unwrap().rows.values().cloned().collect()
    }

    pub fn seed(&self, name: &str) -> Anime {
        self.table.lock().unwrap().insert(&CreateAnime {
            name: name.to_string(),
        })
    }
}

#[async_trait]
impl AnimeStore for MemoryAnimeStore {
    async fn list(&self) -> StoreResult<Vec<Anime>> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Anime>> {
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn create(&self, input: &CreateAnime) -> StoreResult<Anime> {
        Ok(self.table.lock().unwrap().insert(input))
    }

    async fn create_all(&self, inputs: &[CreateAnime], check: RowCheck) -> StoreResult<Vec<Anime>> {
        let mut table = self.table.lock().unwrap();
        let mut staged = AnimeTable {
            rows: table.rows.clone(),
            next_id: table.next_id,
        };

        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let anime = staged.insert(input);
            check(&anime).map_err(StoreError::Rejected)?;
            created.push(anime);
        }

        *table = staged;
        Ok(created)
    }

    async fn update(&self, anime: &Anime) -> StoreResult<Option<Anime>> {
        let mut table = self.table.lock().unwrap();
        Ok(table
            .rows
            .get_mut(&anime.id)
            .map(|row| {
                row.name = anime.name.clone();
                row.clone()
            }))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.table.lock().unwrap().rows.remove(&id).is_some())
    }
}

/// `AppUserStore` holding a fixed set of accounts.
pub struct MemoryUserStore {
    users: Vec<AppUser>,
}

impl MemoryUserStore {
    /// `malves` is an admin (and a user), `user` only a user. Both share
    /// [`PASSWORD`].
    pub fn seeded() -> Self {
        let hash = hash_password(PASSWORD).expect("hashing should succeed");
        let account = |id, name: &str, username: &str, authorities: &str| AppUser {
            id,
            name: name.to_string(),
            username: username.to_string(),
            password: hash.clone(),
            authorities: authorities.to_string(),
        };
        Self {
            users: vec![
                account(1, "Marcos Alves", ADMIN.0, "ROLE_ADMIN,ROLE_USER"),
                account(2, "Plain User", USER.0, "ROLE_USER"),
            ],
        }
    }
}

#[async_trait]
impl AppUserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<AppUser>> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig`. The database URL is never dialed.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused@localhost/unused".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
    }
}

/// Build the production router over in-memory stores. The anime store is
/// returned so tests can inspect what was persisted.
pub fn build_test_app() -> (Router, Arc<MemoryAnimeStore>) {
    let animes = Arc::new(MemoryAnimeStore::default());
    let state = AppState {
        config: Arc::new(test_config()),
        animes: AnimeService::new(animes.clone()),
        users: Arc::new(MemoryUserStore::seeded()),
    };
    (build_app_router(state), animes)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    credentials: Option<(&str, &str)>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some((username, password)) = credentials {
        builder = builder.header(AUTHORIZATION, encode_basic_header(username, password));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str, credentials: Option<(&str, &str)>) -> Response {
    send(app, Method::GET, uri, credentials, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    credentials: Option<(&str, &str)>,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, credentials, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    credentials: Option<(&str, &str)>,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PUT, uri, credentials, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, credentials: Option<(&str, &str)>) -> Response {
    send(app, Method::DELETE, uri, credentials, None).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
