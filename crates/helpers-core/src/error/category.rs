use serde::{Deserialize, Serialize};

/// Machine-readable classification of an [`Error`](super::Error).
///
/// The category is what a reporting boundary looks at to pick a transport
/// status code; see [`Category::status`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Uncategorized,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    PreconditionFailed,
    UnsupportedMediaType,
    InternalServerError,
    NotImplemented,
    ServiceUnavailable,
}

impl Category {
    pub const ALL: [Self; 11] = [
        Self::Uncategorized,
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::PreconditionFailed,
        Self::UnsupportedMediaType,
        Self::InternalServerError,
        Self::NotImplemented,
        Self::ServiceUnavailable,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uncategorized => "uncategorized",
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::PreconditionFailed => "precondition_failed",
            Self::UnsupportedMediaType => "unsupported_media_type",
            Self::InternalServerError => "internal_server_error",
            Self::NotImplemented => "not_implemented",
            Self::ServiceUnavailable => "service_unavailable",
        }
    }

    /// ## Summary
    /// Returns the HTTP status code reported for this category.
    ///
    /// This is the only category to status table in the workspace; response
    /// writers convert the number into their own status type.
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::PreconditionFailed => 412,
            Self::UnsupportedMediaType => 415,
            Self::NotImplemented => 501,
            Self::ServiceUnavailable => 503,
            Self::InternalServerError | Self::Uncategorized => 500,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// Maps an optional category to its status code.
///
/// An absent category is reported like [`Category::Uncategorized`], as a 500.
#[must_use]
pub const fn status_for(category: Option<Category>) -> u16 {
    match category {
        Some(category) => category.status(),
        None => Category::Uncategorized.status(),
    }
}
