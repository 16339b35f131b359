use salvo::{Request, Response, Router, handler, http::StatusCode};
use serde::Serialize;

use helpers_core::constants::IDS_ROUTE_COMPONENT;
use helpers_core::id::{Id, new_id, parse_id};
use helpers_http::Format;
use helpers_http::jsonapi::Resource;

/// ## Summary
/// ID response payload
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: Id,
}

fn id_resource(id: Id) -> Resource<IdResponse> {
    Resource::new(IDS_ROUTE_COMPONENT, id.to_string(), IdResponse { id })
}

/// ## Summary
/// GET /api/ids - Generates a fresh random ID
#[handler]
async fn generate(req: &mut Request, res: &mut Response) {
    let id = new_id();
    tracing::debug!(%id, "Generated ID");

    Format::negotiate(req).write_ok(res, StatusCode::OK, id_resource(id));
}

/// ## Summary
/// GET /api/ids/{id} - Validates and normalizes an ID
///
/// ## Errors
/// Returns HTTP 400 with the structured error payload if the ID is malformed
#[handler]
async fn parse(req: &mut Request, res: &mut Response) {
    let format = Format::negotiate(req);
    let raw = req.param::<String>("id").unwrap_or_default();

    match parse_id(&raw) {
        Ok(id) => format.write_ok(res, StatusCode::OK, id_resource(id)),
        Err(err) => {
            tracing::debug!(id = %raw, error = %err, "Rejected malformed ID");
            format.write_err(res, err.with_context("id", "must be a UUID"));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(IDS_ROUTE_COMPONENT)
        .get(generate)
        .push(Router::with_path("{id}").get(parse))
}
