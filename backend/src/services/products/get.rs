use crate::db::ProductStore;
use crate::services::error::ApiError;
use crate::services::{parse_id, run_blocking};
use actix_web::{web, HttpResponse};

const ENTITY: &str = "Product";

/// Actix web handler for `GET /api/products/{product_id}`.
///
/// Responds with the bare product, or `404` when the id is unknown or malformed.
pub async fn process(
    store: web::Data<ProductStore>,
    product_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&product_id, ENTITY)?;

    let product = run_blocking("Error fetching product", move || store.get_by_id(id))
        .await?
        .ok_or_else(|| ApiError::not_found(ENTITY))?;

    Ok(HttpResponse::Ok().json(product))
}
