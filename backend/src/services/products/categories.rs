use crate::db::ProductStore;
use crate::services::error::ApiError;
use crate::services::run_blocking;
use actix_web::{web, HttpResponse};

/// Actix web handler for `GET /api/categories`: a bare array of `{ name, count }`.
pub async fn process(store: web::Data<ProductStore>) -> Result<HttpResponse, ApiError> {
    let categories =
        run_blocking("Error fetching categories", move || store.category_counts()).await?;
    Ok(HttpResponse::Ok().json(categories))
}
