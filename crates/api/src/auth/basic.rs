//! `Authorization: Basic` credential parsing (RFC 7617).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const SCHEME: &str = "Basic";

/// Username and password as sent by the client.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BasicAuthError {
    #[error("Invalid Authorization format. Expected: Basic <credentials>")]
    WrongScheme,
    #[error("Malformed Basic credentials")]
    Malformed,
}

/// Parse the value of an `Authorization` header.
///
/// The scheme name is case-insensitive; the password may itself contain `:`.
pub fn parse_basic_header(value: &str) -> Result<BasicCredentials, BasicAuthError> {
    let (scheme, encoded) = value
        .trim()
        .split_once(' ')
        .ok_or(BasicAuthError::WrongScheme)?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return Err(BasicAuthError::WrongScheme);
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| BasicAuthError::Malformed)?;
    let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::Malformed)?;
    let (username, password) = decoded.split_once(':').ok_or(BasicAuthError::Malformed)?;
    if username.is_empty() {
        return Err(BasicAuthError::Malformed);
    }

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Build an `Authorization` header value. Used by clients and tests.
pub fn encode_basic_header(username: &str, password: &str) -> String {
    format!("{SCHEME} {}", STANDARD.encode(format!("{username}:{password}")))
}
