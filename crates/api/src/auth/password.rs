//! Argon2id password hashing and verification.
//!
//! All password hashes use the Argon2id variant with a cryptographically random
//! salt generated via [`OsRng`]. The PHC string format is used for storage so
//! that algorithm parameters and salt are embedded in the hash itself.

use std::sync::LazyLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::AppError;

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// [`verify_password`] on the blocking pool.
///
/// Argon2 is deliberately slow; running it inline would stall an async worker
/// for every authenticated request.
pub async fn verify_password_off_thread(
    password: String,
    hash: String,
) -> Result<bool, AppError> {
    let outcome = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("password verification task failed: {e}")))?;

    match outcome {
        Ok(matches) => Ok(matches),
        Err(e) => {
            // A stored hash that cannot be parsed is treated as a mismatch.
            tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
            Ok(false)
        }
    }
}

/// Hash of a password no account has. Checking an unknown username against
/// it costs the same Argon2 work as checking a wrong password.
static UNKNOWN_USER_HASH: LazyLock<String> = LazyLock::new(|| {
    hash_password("no-such-user-placeholder").expect("hashing a constant password")
});

/// Spend one verification's worth of work for a username that does not
/// exist. The outcome is always a mismatch and is discarded.
pub async fn verify_unknown_user(password: String) -> Result<(), AppError> {
    tokio::task::spawn_blocking(move || {
        let _ = verify_password(&password, &UNKNOWN_USER_HASH);
    })
    .await
    .map_err(|e| AppError::InternalError(format!("password verification task failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");

        // The hash must be a valid PHC string starting with the argon2id identifier.
        assert!(
            hash.starts_with("$argon2id$"),
            "expected argon2id PHC prefix"
        );

        let verified = verify_password(password, &hash).expect("verify should succeed");
        assert!(verified, "correct password should verify as true");
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password").expect("hashing should succeed");
        let verified = verify_password("wrong-password", &hash).expect("verify should succeed");
        assert!(!verified, "wrong password should verify as false");
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(verify_password("devdojo", "{bcrypt}$2a$10$abc").is_err());
    }

    #[tokio::test]
    async fn test_off_thread_verification() {
        let hash = hash_password("devdojo").expect("hashing should succeed");

        let ok = verify_password_off_thread("devdojo".into(), hash.clone())
            .await
            .expect("verification should run");
        assert!(ok);

        let bad = verify_password_off_thread("nope".into(), hash)
            .await
            .expect("verification should run");
        assert!(!bad);
    }

    #[tokio::test]
    async fn test_off_thread_unparseable_hash_is_a_mismatch() {
        let ok = verify_password_off_thread("devdojo".into(), "plain-text".into())
            .await
            .expect("verification should run");
        assert!(!ok);
    }

    #[test]
    fn test_unknown_user_hash_is_real_argon2id() {
        assert!(UNKNOWN_USER_HASH.starts_with("$argon2id$"));
        let verified =
            verify_password("devdojo", &UNKNOWN_USER_HASH).expect("verify should succeed");
        assert!(!verified);
    }

    #[tokio::test]
    async fn test_unknown_user_verification_runs() {
        verify_unknown_user("devdojo".into())
            .await
            .expect("verification should run");
    }
}
