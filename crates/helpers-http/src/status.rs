//! Reporting-boundary helpers shared by the JSON and JSON:API writers.

use helpers_core::error::{AnyError, Category};
use salvo::http::StatusCode;

/// ## Summary
/// Returns the HTTP status for an error's category.
///
/// The numeric code comes from [`Category::status`]; this only converts it.
#[must_use]
pub fn status_code(err: &AnyError) -> StatusCode {
    StatusCode::from_u16(err.category().status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// ## Summary
/// Logs an error that reached the boundary without a category.
///
/// Uncategorized errors are answered with a 500 and are presumed unexpected,
/// so they are recorded before the response is written. The message and
/// context are logged next to the detail chain, which is empty for a foreign
/// error that had context attached.
pub fn log_uncategorized(err: &AnyError) {
    if err.category() == Category::Uncategorized {
        tracing::error!(
            error_message = %err.message(),
            detail = %err.detail(),
            context = ?err.context(),
            "Uncategorized error reached the response writer"
        );
    }
}

#[cfg(test)]
mod tests {
    use helpers_core::error::{Error, add_error_context};
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn test_status_code_follows_category() {
        for category in Category::ALL {
            let err: AnyError = category.error("x").into();
            assert_eq!(status_code(&err).as_u16(), category.status());
        }
    }

    #[test]
    #[traced_test]
    fn test_foreign_error_is_500() {
        let err = AnyError::foreign(std::io::Error::other("disk"));
        assert_eq!(status_code(&err), StatusCode::INTERNAL_SERVER_ERROR);

        let wrapped: AnyError = Error::wrap(err, "parse failed").into();
        assert_eq!(status_code(&wrapped), StatusCode::INTERNAL_SERVER_ERROR);
        log_uncategorized(&wrapped);

        assert!(logs_contain("Uncategorized error reached the response writer"));
        assert!(logs_contain("parse failed: disk"));
    }

    #[test]
    #[traced_test]
    fn test_foreign_error_with_context_is_logged() {
        let err = add_error_context(
            AnyError::foreign(std::io::Error::other("timeout")),
            "host",
            "down",
        );
        assert_eq!(err.category(), Category::Uncategorized);
        assert_eq!(err.detail(), "");

        log_uncategorized(&err.into());

        assert!(logs_contain("error_message=timeout"));
        assert!(logs_contain("host"));
        assert!(logs_contain("down"));
    }

    #[test]
    #[traced_test]
    fn test_categorized_error_is_not_logged() {
        let err: AnyError = Category::NotFound.error("user missing").into();
        log_uncategorized(&err);

        assert!(!logs_contain("Uncategorized error reached the response writer"));
        assert!(!logs_contain("user missing"));
    }
}
