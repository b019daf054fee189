//! Credential primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`basic`] -- Parsing of `Authorization: Basic` headers.

pub mod basic;
pub mod password;
