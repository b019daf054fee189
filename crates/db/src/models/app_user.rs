//! Credential record used for HTTP Basic authentication.

use anime_core::roles::parse_authorities;
use anime_core::types::DbId;
use sqlx::FromRow;

/// Full row from the `app_user` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct AppUser {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub password: String,
    pub authorities: String,
}

impl AppUser {
    /// Normalized role names granted by `authorities`.
    pub fn roles(&self) -> Vec<String> {
        parse_authorities(&self.authorities)
    }
}
