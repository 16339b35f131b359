use salvo::{Depot, Request, Response, Router, handler, http::StatusCode};
use serde::{Deserialize, Serialize};

use helpers_core::constants::PASSWORDS_ROUTE_COMPONENT;
use helpers_core::error::{AnyError, Category, Result};
use helpers_core::id::new_id;
use helpers_http::Format;
use helpers_http::jsonapi::Resource;

use crate::service_handler::get_passwords_from_depot;

/// ## Summary
/// Hash request payload
#[derive(Debug, Deserialize)]
pub struct HashRequest {
    pub password: String,
}

/// ## Summary
/// Hash response payload
#[derive(Debug, Serialize)]
pub struct HashResponse {
    pub hash: String,
}

/// ## Summary
/// Verify request payload
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub password: String,
    pub hash: String,
}

/// ## Summary
/// Runs a password service call on the blocking pool.
///
/// Argon2 hashing is CPU and memory bound and must not run on the async workers.
///
/// ## Errors
/// Returns the call's own error, or an internal server error if the task
/// panicked or was cancelled.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|err| {
        Category::InternalServerError.wrap(AnyError::foreign(err), "password task failed")
    })?
}

async fn hash_password(req: &mut Request, depot: &Depot) -> Result<String> {
    let hash_req: HashRequest = req.parse_json().await.map_err(|e| {
        Category::BadRequest.wrap(AnyError::foreign(e), "invalid request body")
    })?;

    if hash_req.password.is_empty() {
        return Err(Category::BadRequest
            .error("password is required")
            .with_context("password", "must not be empty"));
    }

    let service = get_passwords_from_depot(depot)?;
    run_blocking(move || service.hash(&hash_req.password)).await
}

async fn verify_password(req: &mut Request, depot: &Depot) -> Result<()> {
    let verify_req: VerifyRequest = req.parse_json().await.map_err(|e| {
        Category::BadRequest.wrap(AnyError::foreign(e), "invalid request body")
    })?;

    let service = get_passwords_from_depot(depot)?;
    run_blocking(move || service.check_password(&verify_req.password, &verify_req.hash)).await
}

/// ## Summary
/// POST /api/passwords/hash - Hashes a password with a random salt
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed or the password is empty
/// Returns HTTP 500 if hashing fails
#[handler]
async fn hash(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing password hash request");
    let format = Format::negotiate(req);

    match hash_password(req, depot).await {
        Ok(password_hash) => format.write_ok(
            res,
            StatusCode::CREATED,
            Resource::new(
                "password_hashes",
                new_id().to_string(),
                HashResponse {
                    hash: password_hash,
                },
            ),
        ),
        Err(err) => format.write_err(res, err),
    }
}

/// ## Summary
/// POST /api/passwords/verify - Checks a password against a stored hash
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed
/// Returns HTTP 401 if the password does not match
/// Returns HTTP 500 if the stored hash is not a valid PHC string
#[handler]
async fn verify(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing password verify request");
    let format = Format::negotiate(req);

    match verify_password(req, depot).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(err) => format.write_err(res, err),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PASSWORDS_ROUTE_COMPONENT)
        .push(Router::with_path("hash").post(hash))
        .push(Router::with_path("verify").post(verify))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_blocking_returns_call_result() {
        let value = run_blocking(|| Ok(7)).await.expect("value");
        assert_eq!(value, 7);

        let err = run_blocking(|| -> Result<()> { Err(Category::Unauthorized.error("nope")) })
            .await
            .expect_err("call error");
        assert_eq!(err.category(), Category::Unauthorized);
    }

    #[tokio::test]
    async fn test_run_blocking_panic_is_internal_error() {
        let err = run_blocking(|| -> Result<()> { panic!("argon2 blew up") })
            .await
            .expect_err("panic error");

        assert_eq!(err.category(), Category::InternalServerError);
        assert_eq!(err.message(), "password task failed");
        assert!(err.detail().starts_with("password task failed: "));
    }
}
