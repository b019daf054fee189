//! HTTP Basic authentication extractor for Axum handlers.

use anime_core::error::CoreError;
use anime_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::basic::parse_basic_header;
use crate::auth::password::{verify_password_off_thread, verify_unknown_user};
use crate::error::AppError;
use crate::state::AppState;

/// Generic failure message; never reveals whether the username exists.
const BAD_CREDENTIALS: &str = "Invalid username or password";

/// Authenticated caller resolved from the `Authorization: Basic` header.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user = %user.username, roles = ?user.roles, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's `app_user.id`.
    pub user_id: DbId,
    pub username: String,
    /// Normalized role names (`ADMIN`, `USER`, ...).
    pub roles: Vec<String>,
}

impl AuthUser {
    pub fn has_role(&self, role: &str) -> bool {
        anime_core::roles::has_role(&self.roles, role)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let credentials = parse_basic_header(header)
            .map_err(|e| AppError::Core(CoreError::Unauthorized(e.to_string())))?;

        let Some(account) = state.users.find_by_username(&credentials.username).await? else {
            verify_unknown_user(credentials.password).await?;
            tracing::warn!(username = %credentials.username, "Authentication failed");
            return Err(unauthorized());
        };

        let verified =
            verify_password_off_thread(credentials.password, account.password.clone()).await?;
        if !verified {
            tracing::warn!(username = %credentials.username, "Authentication failed");
            return Err(unauthorized());
        }

        let user = AuthUser {
            user_id: account.id,
            roles: account.roles(),
            username: account.username,
        };
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}

fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into()))
}
