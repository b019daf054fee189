//! Responses for requests no route handles.
//!
//! Both fallbacks authenticate first, so an anonymous caller gets 401 on
//! every path and only a known user learns which paths exist.

use axum::http::{Method, Uri};

use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// Fallback for paths with no route.
pub async fn route_not_found(_user: AuthUser, uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(_user: AuthUser, method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
