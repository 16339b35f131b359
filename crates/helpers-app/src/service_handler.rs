use salvo::async_trait;
use std::sync::Arc;

use helpers_core::error::{Category, Result};
use helpers_service::password::PasswordService;

pub struct PasswordServiceHandler {
    pub service: Arc<dyn PasswordService>,
}

#[async_trait]
impl salvo::Handler for PasswordServiceHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.service));
    }
}

/// ## Summary
/// Retrieves the password service from the depot.
///
/// ## Errors
/// Returns an internal server error if no service was injected.
pub fn get_passwords_from_depot(depot: &salvo::Depot) -> Result<Arc<dyn PasswordService>> {
    depot
        .obtain::<Arc<dyn PasswordService>>()
        .cloned()
        .map_err(|_err| {
            Category::InternalServerError.error("password service not found in depot")
        })
}
