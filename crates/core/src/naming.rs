//! The one business rule an anime record carries: a usable name.

use crate::error::CoreError;

/// Message used when an already-persisted record turns out to have no name.
pub const INVALID_NAME: &str = "Invalid Name";

/// Reject empty names. Whitespace counts as content.
pub fn ensure_name_present(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(INVALID_NAME.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_name_is_accepted() {
        assert!(ensure_name_present("Naruto").is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = ensure_name_present("").unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg == INVALID_NAME));
    }

    #[test]
    fn whitespace_name_is_kept() {
        assert!(ensure_name_present(" ").is_ok());
    }
}
