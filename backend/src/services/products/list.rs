use super::DEFAULT_LIMIT;
use crate::db::{ProductCriteria, ProductStore};
use crate::services::error::ApiError;
use crate::services::run_blocking;
use actix_web::{web, HttpResponse};
use common::requests::ProductListQuery;
use common::responses::ProductResponse;

/// Actix web handler for `GET /api/products`.
///
/// `category`, `query` and `in_stock_only` narrow the list; with none of them
/// the whole collection is returned.
pub async fn process(
    store: web::Data<ProductStore>,
    query: web::Query<ProductListQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let criteria = ProductCriteria {
        category: query.category,
        query: query.query,
        in_stock_only: query.in_stock_only,
    };

    let products = run_blocking("Error fetching products", move || {
        if criteria.is_empty() {
            store.list_all()
        } else {
            store.search(&criteria)
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(ProductResponse::limited(products, limit)))
}
