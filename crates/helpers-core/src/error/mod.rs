//! Structured errors.
//!
//! ## Summary
//! An [`Error`] carries a [`Category`], a short user-facing message, a detail
//! chain accumulating every wrapped predecessor, and at most one
//! [`ErrorContext`]. Errors from other crates enter the model through
//! [`AnyError::Foreign`] and read as uncategorized with an empty detail chain.
//!
//! Values are never mutated: wrapping or annotating returns a new error.

mod category;
mod context;

use std::borrow::Cow;
use std::sync::Arc;

use thiserror::Error;

pub use category::{Category, status_for};
pub use context::ErrorContext;

pub type Result<T> = std::result::Result<T, Error>;

/// Separator between a wrapping message and the detail of its cause.
const DETAIL_SEPARATOR: &str = ": ";

/// A classified error with a detail chain and optional context.
///
/// `Display` renders the detail chain, `source()` the wrapped predecessor.
#[derive(Error, Debug, Clone)]
#[error("{detail}")]
pub struct Error {
    category: Category,
    message: String,
    detail: String,
    context: Option<ErrorContext>,
    #[source]
    predecessor: Option<Arc<AnyError>>,
}

/// Either an [`Error`] from this model or any other error value.
#[derive(Error, Debug, Clone)]
pub enum AnyError {
    #[error(transparent)]
    Structured(#[from] Error),
    #[error(transparent)]
    Foreign(#[from] Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Creates an uncategorized error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Category::Uncategorized.error(message)
    }

    /// ## Summary
    /// Wraps `cause`, keeping its category and context.
    ///
    /// The detail chain becomes `"{message}: {cause detail}"`. A foreign cause
    /// contributes its `Display` output and yields an uncategorized error.
    #[must_use]
    pub fn wrap(cause: impl Into<AnyError>, message: impl Into<String>) -> Self {
        let cause = cause.into();
        let category = cause.category();
        Self::chained(category, cause, message.into())
    }

    fn chained(category: Category, cause: AnyError, message: String) -> Self {
        let detail = match &cause {
            AnyError::Structured(inner) => {
                format!("{message}{DETAIL_SEPARATOR}{}", inner.detail)
            }
            AnyError::Foreign(inner) => format!("{message}{DETAIL_SEPARATOR}{inner}"),
        };

        Self {
            category,
            context: cause.context().cloned(),
            message,
            detail,
            predecessor: Some(Arc::new(cause)),
        }
    }

    /// Returns a copy of this error whose context is replaced by
    /// `field` / `message`.
    #[must_use]
    pub fn with_context(&self, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: Some(ErrorContext::new(field, message)),
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub const fn context(&self) -> Option<&ErrorContext> {
        self.context.as_ref()
    }

    /// The error this one wraps, if any.
    #[must_use]
    pub fn predecessor(&self) -> Option<&AnyError> {
        self.predecessor.as_deref()
    }

    /// ## Summary
    /// Walks the wrap chain down to the first error ever wrapped.
    ///
    /// An error with no wrap history is its own cause.
    #[must_use]
    pub fn cause(&self) -> AnyError {
        let mut current = self;
        loop {
            match current.predecessor.as_deref() {
                Some(AnyError::Structured(inner)) => current = inner,
                Some(foreign @ AnyError::Foreign(_)) => return foreign.clone(),
                None => return AnyError::Structured(current.clone()),
            }
        }
    }
}

impl Category {
    /// Creates an error of this category.
    #[must_use]
    pub fn error(self, message: impl Into<String>) -> Error {
        let message = message.into();
        Error {
            category: self,
            detail: message.clone(),
            message,
            context: None,
            predecessor: None,
        }
    }

    /// Wraps `cause`, stamping this category on the result. Context carried
    /// by a structured cause is kept.
    #[must_use]
    pub fn wrap(self, cause: impl Into<AnyError>, message: impl Into<String>) -> Error {
        Error::chained(self, cause.into(), message.into())
    }
}

impl AnyError {
    /// Adapts an error from outside this model.
    ///
    /// Errors already in the model should be converted with `into()` so they
    /// keep their category.
    #[must_use]
    pub fn foreign<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Foreign(Arc::new(err))
    }

    #[must_use]
    pub const fn as_structured(&self) -> Option<&Error> {
        match self {
            Self::Structured(err) => Some(err),
            Self::Foreign(_) => None,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Structured(err) => err.category,
            Self::Foreign(_) => Category::Uncategorized,
        }
    }

    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Structured(err) => Cow::Borrowed(&err.message),
            Self::Foreign(err) => Cow::Owned(err.to_string()),
        }
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Structured(err) => &err.detail,
            Self::Foreign(_) => "",
        }
    }

    #[must_use]
    pub const fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Structured(err) => err.context(),
            Self::Foreign(_) => None,
        }
    }

    #[must_use]
    pub fn cause(&self) -> Self {
        match self {
            Self::Structured(err) => err.cause(),
            Self::Foreign(_) => self.clone(),
        }
    }

    /// ## Summary
    /// Attaches `field` / `message` as the error's only context.
    ///
    /// A foreign error becomes an uncategorized [`Error`] whose message is the
    /// foreign error's text and whose detail chain is empty.
    #[must_use]
    pub fn with_context(&self, field: impl Into<String>, message: impl Into<String>) -> Error {
        match self {
            Self::Structured(err) => err.with_context(field, message),
            Self::Foreign(err) => Error {
                category: Category::Uncategorized,
                message: err.to_string(),
                detail: String::new(),
                context: Some(ErrorContext::new(field, message)),
                predecessor: None,
            },
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for AnyError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Foreign(Arc::from(err))
    }
}

/// Attaches a context annotation to any error, replacing a previous one.
#[must_use]
pub fn add_error_context(
    err: impl Into<AnyError>,
    field: impl Into<String>,
    message: impl Into<String>,
) -> Error {
    err.into().with_context(field, message)
}

/// Wrapping helpers for results whose error converts into [`AnyError`].
pub trait ResultExt<T> {
    /// ## Errors
    /// Returns the original error wrapped with `message`, category preserved.
    fn wrap_err(self, message: impl Into<String>) -> Result<T>;

    /// ## Errors
    /// Returns the original error wrapped with `message` under `category`.
    fn wrap_err_as(self, category: Category, message: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AnyError>,
{
    fn wrap_err(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|err| Error::wrap(err, message))
    }

    fn wrap_err_as(self, category: Category, message: impl Into<String>) -> Result<T> {
        self.map_err(|err| category.wrap(err, message))
    }
}
