//! # Product Service Module
//!
//! Routes under `/api/products`, plus the `/api/categories` aggregate.
//!
//! ## Sub-modules:
//! - `list`: products filtered by category, free text and stock.
//! - `search`: required free-text search with optional category and stock narrowing.
//! - `get`: a single product by id.
//! - `categories`: product counts per category.

mod categories;
mod get;
mod list;
mod search;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all product endpoints.
const API_PATH: &str = "/api/products";

/// The path of the category aggregate.
const CATEGORIES_PATH: &str = "/api/categories";

/// Page size used when the request has no `limit`.
const DEFAULT_LIMIT: usize = 20;

/// Configures and returns the Actix `Scope` for the product routes.
///
/// `/search` is registered before `/{product_id}` so it is not captured by the id route.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/search", get().to(search::process))
        .route("/{product_id}", get().to(get::process))
}

/// Configures and returns the Actix `Scope` serving `GET /api/categories`.
pub fn configure_category_routes() -> Scope {
    scope(CATEGORIES_PATH).route("", get().to(categories::process))
}
