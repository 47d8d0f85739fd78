use super::DEFAULT_LIMIT;
use crate::db::{ProductCriteria, ProductStore};
use crate::services::error::ApiError;
use crate::services::{required, run_blocking};
use actix_web::{web, HttpResponse};
use common::requests::SearchQuery;
use common::responses::ProductResponse;

/// Actix web handler for `GET /api/products/search?q=...`.
///
/// `q` is matched against name or description and may be narrowed further by
/// `category` and `in_stock_only`. A missing `q` is a `400`.
pub async fn process(
    store: web::Data<ProductStore>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let text = required(query.q, "q")?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let criteria = ProductCriteria {
        category: query.category,
        query: Some(text),
        in_stock_only: query.in_stock_only,
    };

    let products = run_blocking("Error searching products", move || store.search(&criteria)).await?;

    Ok(HttpResponse::Ok().json(ProductResponse::limited(products, limit)))
}
