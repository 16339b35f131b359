//! Entity identifiers.

use uuid::Uuid;

use crate::error::{AnyError, Category, Result, ResultExt};

/// Unique identifier of an entity.
pub type Id = Uuid;

/// Returns a fresh random identifier.
#[must_use]
pub fn new_id() -> Id {
    Uuid::new_v4()
}

/// ## Summary
/// Parses an identifier from its textual form.
///
/// ## Errors
/// Returns a [`Category::BadRequest`] error wrapping the parse failure if `s`
/// is not a valid UUID.
pub fn parse_id(s: &str) -> Result<Id> {
    Uuid::parse_str(s)
        .map_err(AnyError::foreign)
        .wrap_err_as(Category::BadRequest, "invalid ID")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_distinct() {
        assert_ne!(new_id(), new_id());
        assert_eq!(new_id().get_version_num(), 4);
    }

    #[test]
    fn test_parse_round_trip() {
        let id = new_id();
        assert_eq!(parse_id(&id.to_string()).expect("valid id"), id);
    }

    #[test]
    fn test_parse_invalid_is_bad_request() {
        let err = parse_id("xyz").expect_err("not a uuid");

        assert_eq!(err.category(), Category::BadRequest);
        assert_eq!(err.message(), "invalid ID");
        assert!(err.detail().starts_with("invalid ID: "));
        assert!(matches!(err.cause(), AnyError::Foreign(_)));
    }
}
