//! Role-based access control for the anime routes.
//!
//! Authorization is table-driven: [`ANIME_ROUTE_RULES`] lists
//! `(method, path pattern, role)` triples and the first matching rule
//! decides. A request no rule matches only needs to be authenticated.
//!
//! Pattern syntax:
//! - a literal segment matches itself,
//! - `*` matches exactly one non-empty segment,
//! - a trailing `/**` matches the prefix itself and anything below it.

use anime_core::error::CoreError;
use anime_core::roles::{ROLE_ADMIN, ROLE_USER};
use axum::extract::{FromRequestParts, Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// One row of a route→role table.
#[derive(Debug, Clone, Copy)]
pub struct RouteRule {
    pub method: &'static str,
    pub pattern: &'static str,
    pub role: &'static str,
}

impl RouteRule {
    pub const fn new(method: &'static str, pattern: &'static str, role: &'static str) -> Self {
        Self {
            method,
            pattern,
            role,
        }
    }

    fn matches(&self, method: &Method, path: &str) -> bool {
        self.method == method.as_str() && pattern_matches(self.pattern, path)
    }
}

/// Listing every anime is an admin operation even though single reads are
/// open to plain users, so the exact `/animes` rule comes first.
pub const ANIME_ROUTE_RULES: &[RouteRule] = &[
    RouteRule::new("GET", "/animes", ROLE_ADMIN),
    RouteRule::new("GET", "/animes/*", ROLE_USER),
    RouteRule::new("POST", "/animes/**", ROLE_ADMIN),
    RouteRule::new("PUT", "/animes/**", ROLE_ADMIN),
    RouteRule::new("DELETE", "/animes/**", ROLE_ADMIN),
];

/// The role the first matching rule requires, if any rule matches.
pub fn required_role(rules: &[RouteRule], method: &Method, path: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| rule.matches(method, path))
        .map(|rule| rule.role)
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let path = normalize(path);

    if let Some(prefix) = pattern.strip_suffix("/**") {
        return path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'));
    }

    let mut wanted = pattern.split('/');
    let mut actual = path.split('/');
    loop {
        match (wanted.next(), actual.next()) {
            (None, None) => return true,
            (Some("*"), Some(segment)) if !segment.is_empty() => continue,
            (Some(w), Some(a)) if w == a => continue,
            _ => return false,
        }
    }
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Route guard: authenticate the caller, then check the role table.
///
/// Mounted with `route_layer`, so it only sees requests a route matched;
/// the router fallbacks authenticate the rest. The resolved [`AuthUser`] is
/// left in the request extensions for handlers.
pub async fn enforce_route_roles(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if let Some(role) = required_role(ANIME_ROUTE_RULES, &parts.method, parts.uri.path()) {
        if !user.has_role(role) {
            tracing::warn!(
                user = %user.username,
                method = %parts.method,
                path = %parts.uri.path(),
                required = role,
                "Access denied",
            );
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "{role} role required"
            ))));
        }
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}
