//! Well-known role names and parsing of stored authority lists.
//!
//! `app_user.authorities` holds a comma-separated list such as
//! `ROLE_ADMIN,ROLE_USER`. The `ROLE_` prefix is optional; roles are
//! compared without it.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_USER: &str = "USER";

const ROLE_PREFIX: &str = "ROLE_";

/// Split a stored authority list into normalized role names.
///
/// Entries are trimmed, upper-cased and stripped of the `ROLE_` prefix.
/// Empty entries are dropped and duplicates are kept only once.
pub fn parse_authorities(raw: &str) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim().to_ascii_uppercase();
        let role = entry.strip_prefix(ROLE_PREFIX).unwrap_or(entry.as_str());
        if role.is_empty() || roles.iter().any(|r| r == role) {
            continue;
        }
        roles.push(role.to_string());
    }
    roles
}

/// Whether `roles` grants `required`.
pub fn has_role(roles: &[String], required: &str) -> bool {
    roles.iter().any(|r| r == required)
}
