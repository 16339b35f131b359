//! Plain JSON responses.

use helpers_core::error::{AnyError, Error, ErrorContext};
use salvo::Response;
use salvo::http::StatusCode;
use salvo::writing::{Json, Scribe};
use serde::Serialize;

use crate::status::{log_uncategorized, status_code};

/// ## Summary
/// JSON body written for an error.
///
/// `context` is omitted when the error carries none.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub error: u16,
    pub message: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl From<&AnyError> for ErrorPayload {
    fn from(err: &AnyError) -> Self {
        Self {
            error: status_code(err).as_u16(),
            message: err.message().into_owned(),
            detail: err.detail().to_string(),
            context: err.context().cloned(),
        }
    }
}

/// Writes `data` as a JSON body with the given status.
pub fn write_json<T>(res: &mut Response, code: StatusCode, data: T)
where
    T: Serialize + Send,
{
    res.status_code(code);
    res.render(Json(data));
}

/// ## Summary
/// Writes an error as a JSON body, with the status picked from its category.
///
/// ## Side Effects
/// Uncategorized errors are logged before the response is written.
pub fn write_err_json(res: &mut Response, err: impl Into<AnyError>) {
    let err = err.into();
    log_uncategorized(&err);

    write_json(res, status_code(&err), ErrorPayload::from(&err));
}

/// Renders an error through [`write_err_json`].
#[derive(Debug)]
pub struct ErrorJson(pub AnyError);

impl From<AnyError> for ErrorJson {
    fn from(err: AnyError) -> Self {
        Self(err)
    }
}

impl From<Error> for ErrorJson {
    fn from(err: Error) -> Self {
        Self(err.into())
    }
}

impl Scribe for ErrorJson {
    fn render(self, res: &mut Response) {
        write_err_json(res, self.0);
    }
}
