use std::error::Error as _;

use anime_core::error::CoreError;
use anime_db::store::StoreError;
use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Realm advertised in the `WWW-Authenticate` challenge on 401 responses.
pub const BASIC_REALM_CHALLENGE: &str = "Basic realm=\"animes\"";

/// Marker carried by every failure that maps to a deliberate client status.
pub const DEVELOPER_MESSAGE: &str = "A ResponseStatusException Happened";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `anime_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// The path exists but does not accept the request method.
    #[error("{method} is not supported on {path}")]
    MethodNotAllowed { method: String, path: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(db) => AppError::Database(db),
            StoreError::Rejected(core) => AppError::Core(core),
        }
    }
}

/// The request-independent part of every error body.
///
/// [`crate::middleware::error_format`] adds `timestamp`, `path`,
/// `requestId` and the optional `trace` on the way out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status: u16,
    /// Canonical reason phrase of `status`.
    pub error: String,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_message: Option<&'static str>,
}

/// Response extension left behind by [`AppError::into_response`].
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub body: ErrorBody,
    /// The error and its source chain, one cause per line.
    pub trace: String,
}

impl ErrorReport {
    /// Report for an error response that a layer produced without going
    /// through [`AppError`], such as the 408 from the request timeout.
    pub fn for_status(status: StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unknown");
        let code = match status {
            StatusCode::NOT_FOUND => "NOT_FOUND",
            StatusCode::METHOD_NOT_ALLOWED => "METHOD_NOT_ALLOWED",
            StatusCode::REQUEST_TIMEOUT => "REQUEST_TIMEOUT",
            s if s.is_server_error() => "INTERNAL_ERROR",
            _ => "HTTP_ERROR",
        };
        Self {
            body: ErrorBody::new(status, code, reason.to_string()),
            trace: format!("{} {reason}", status.as_u16()),
        }
    }
}

impl ErrorBody {
    fn new(status: StatusCode, code: &'static str, message: String) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            code,
            message,
            developer_message: (!status.is_server_error()).then_some(DEVELOPER_MESSAGE),
        }
    }
}

impl AppError {
    /// Map to an HTTP status, error code and client-safe message.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::RouteNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            AppError::MethodNotAllowed { .. } => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                self.to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }

    fn trace(&self) -> String {
        let mut trace = format!("{self}");
        let mut source = self.source();
        while let Some(cause) = source {
            trace.push_str("\ncaused by: ");
            trace.push_str(&cause.to_string());
            source = cause.source();
        }
        trace
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = ErrorBody::new(status, code, message);

        let mut response = (status, axum::Json(&body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                WWW_AUTHENTICATE,
                HeaderValue::from_static(BASIC_REALM_CHALLENGE),
            );
        }
        response.extensions_mut().insert(ErrorReport {
            body,
            trace: self.trace(),
        });
        response
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
