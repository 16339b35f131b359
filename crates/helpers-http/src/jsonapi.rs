//! JSON:API responses.

use helpers_core::constants::JSONAPI_MEDIA_TYPE;
use helpers_core::error::{AnyError, Error, ErrorContext};
use salvo::Response;
use salvo::http::StatusCode;
use salvo::writing::{Scribe, Text};
use serde::Serialize;

use crate::status::{log_uncategorized, status_code};

/// Top-level document carrying primary data.
#[derive(Debug, Clone, Serialize)]
pub struct Document<T> {
    pub data: T,
}

/// ## Summary
/// A resource object: `type`, `id` and the resource's attributes.
#[derive(Debug, Clone, Serialize)]
pub struct Resource<A> {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: A,
}

impl<A> Resource<A> {
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>, attributes: A) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            attributes,
        }
    }
}

/// Error object; `meta` holds the error's context when there is one.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorObject {
    pub status: String,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ErrorContext>,
}

impl From<&AnyError> for ErrorObject {
    fn from(err: &AnyError) -> Self {
        Self {
            status: status_code(err).as_u16().to_string(),
            title: err.message().into_owned(),
            detail: err.detail().to_string(),
            meta: err.context().cloned(),
        }
    }
}

/// Top-level document carrying errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

fn write_document<T: Serialize>(res: &mut Response, code: StatusCode, document: &T) {
    let body = match serde_json::to_vec(document) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize JSON:API document");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Text::Plain(e.to_string()));
            return;
        }
    };

    res.status_code(code);
    if let Err(e) = res.add_header("Content-Type", JSONAPI_MEDIA_TYPE, true) {
        tracing::warn!(error = %e, "Failed to set JSON:API content type");
    }
    if let Err(e) = res.write_body(body) {
        tracing::error!("Failed to write response body: {}", e);
    }
}

/// ## Summary
/// Writes `data` as the primary data of a JSON:API document.
///
/// ## Side Effects
/// If `data` fails to serialize, a plain-text 500 is written instead.
pub fn write_jsonapi<T: Serialize>(res: &mut Response, code: StatusCode, data: T) {
    write_document(res, code, &Document { data });
}

/// ## Summary
/// Writes an error as a JSON:API error document, with the status picked from
/// its category.
///
/// ## Side Effects
/// Uncategorized errors are logged before the response is written.
pub fn write_err_jsonapi(res: &mut Response, err: impl Into<AnyError>) {
    let err = err.into();
    log_uncategorized(&err);

    let document = ErrorDocument {
        errors: vec![ErrorObject::from(&err)],
    };
    write_document(res, status_code(&err), &document);
}

/// Renders an error through [`write_err_jsonapi`].
#[derive(Debug)]
pub struct ErrorJsonApi(pub AnyError);

impl From<AnyError> for ErrorJsonApi {
    fn from(err: AnyError) -> Self {
        Self(err)
    }
}

impl From<Error> for ErrorJsonApi {
    fn from(err: Error) -> Self {
        Self(err.into())
    }
}

impl Scribe for ErrorJsonApi {
    fn render(self, res: &mut Response) {
        write_err_jsonapi(res, self.0);
    }
}
