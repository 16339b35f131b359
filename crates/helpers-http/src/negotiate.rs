use helpers_core::constants::JSONAPI_MEDIA_TYPE;
use helpers_core::error::AnyError;
use salvo::http::StatusCode;
use salvo::{Request, Response};
use serde::Serialize;

use crate::json::{write_err_json, write_json};
use crate::jsonapi::{Resource, write_err_jsonapi, write_jsonapi};

/// Response flavour chosen from the request's `Accept` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    JsonApi,
}

impl Format {
    /// ## Summary
    /// Picks JSON:API when the client accepts its media type, JSON otherwise.
    #[must_use]
    pub fn negotiate(req: &Request) -> Self {
        let accepts_jsonapi = req
            .headers()
            .get_all("Accept")
            .iter()
            .filter_map(|value| value.to_str().ok())
            .any(|value| value.contains(JSONAPI_MEDIA_TYPE));

        if accepts_jsonapi {
            Self::JsonApi
        } else {
            Self::Json
        }
    }

    /// ## Summary
    /// Writes a resource: its attributes as plain JSON, or the full resource
    /// object as JSON:API primary data.
    pub fn write_ok<A>(self, res: &mut Response, code: StatusCode, resource: Resource<A>)
    where
        A: Serialize + Send,
    {
        match self {
            Self::Json => write_json(res, code, resource.attributes),
            Self::JsonApi => write_jsonapi(res, code, resource),
        }
    }

    /// Writes an error in this format.
    pub fn write_err(self, res: &mut Response, err: impl Into<AnyError>) {
        match self {
            Self::Json => write_err_json(res, err),
            Self::JsonApi => write_err_jsonapi(res, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::prelude::*;
    use salvo::test::{ResponseExt, TestClient};

    use super::*;

    #[handler]
    async fn echo_format(req: &mut Request, res: &mut Response) {
        let format = Format::negotiate(req);
        res.render(format!("{format:?}"));
    }

    async fn negotiated(accept: Option<&str>) -> String {
        let service = Service::new(Router::new().get(echo_format));
        let mut client = TestClient::get("http://127.0.0.1:5800/");
        if let Some(accept) = accept {
            client = client.add_header("Accept", accept, true);
        }
        let mut resp = client.send(&service).await;
        resp.take_string().await.expect("body")
    }

    #[tokio::test]
    async fn test_defaults_to_json() {
        assert_eq!(negotiated(None).await, "Json");
        assert_eq!(negotiated(Some("application/json")).await, "Json");
    }

    #[tokio::test]
    async fn test_jsonapi_when_accepted() {
        assert_eq!(negotiated(Some(JSONAPI_MEDIA_TYPE)).await, "JsonApi");
        assert_eq!(
            negotiated(Some("text/html, application/vnd.api+json")).await,
            "JsonApi"
        );
    }
}
