//! # HTTP Services
//!
//! Route handlers for the catalog API. Handlers validate query parameters,
//! call the stores on the blocking thread pool, apply the `limit` and wrap
//! results in the response envelopes from `common::responses`.
//!
//! ## Sub-modules:
//! - `practitioners`: `/api/practitioners` list, search and fetch-by-id.
//! - `products`: `/api/products` list, search and fetch-by-id, plus `/api/categories`.
//! - `health`: static `/` and `/health` responses.
//! - `error`: `ApiError` and its HTTP mapping.

pub mod error;
mod health;
mod practitioners;
mod products;

use crate::db::{PractitionerStore, ProductStore, StoreError};
use actix_cors::Cors;
use actix_web::web;
use error::ApiError;
use log::error;

/// Registers store state, the query-string error handler and every route.
///
/// Used by `main` and by the handler tests so both run the same routing table.
pub fn configure(
    practitioner_store: PractitionerStore,
    product_store: ProductStore,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(practitioner_store))
            .app_data(web::Data::new(product_store))
            .app_data(query_config())
            .service(practitioners::configure_routes())
            .service(products::configure_routes())
            .service(products::configure_category_routes())
            .configure(health::configure_routes);
    }
}

/// Cross-origin policy for browser clients: any origin, method and header, with credentials.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Malformed query strings (e.g. `limit=abc`) become `400` responses with the JSON error body.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}

/// Runs a store operation on the blocking pool so SQLite I/O never stalls a worker.
async fn run_blocking<T, F>(context: &'static str, operation: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(operation).await {
        Ok(result) => result.map_err(|e| ApiError::storage(context, e)),
        Err(join_error) => {
            error!("{}: blocking task failed: {}", context, join_error);
            Err(ApiError::StorageUnavailable {
                context,
                cause: "store task did not complete",
            })
        }
    }
}

/// Parses an `{id}` path segment. Anything other than a positive integer is reported as not found.
fn parse_id(raw: &str, entity: &'static str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::not_found(entity)),
    }
}

/// Unwraps a required query parameter.
fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::Validation(format!("Missing required parameter: {}", name)))
}
