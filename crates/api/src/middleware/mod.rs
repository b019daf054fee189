//! Authentication, authorization and error-formatting middleware.
//!
//! - [`auth::AuthUser`] -- Resolves the caller from HTTP Basic credentials.
//! - [`rbac::enforce_route_roles`] -- Route guard driven by [`rbac::ANIME_ROUTE_RULES`].
//! - [`error_format::format_error_response`] -- Adds request context to error bodies.

pub mod auth;
pub mod error_format;
pub mod rbac;
