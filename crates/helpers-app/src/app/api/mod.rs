mod healthcheck;
mod ids;
mod passwords;

use salvo::Router;

pub use helpers_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, IDS_ROUTE_COMPONENT, IDS_ROUTE_PREFIX,
    PASSWORDS_ROUTE_COMPONENT, PASSWORDS_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router with every handler mounted under `/api`.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(ids::routes())
        .push(passwords::routes())
}
