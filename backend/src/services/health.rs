use actix_web::web::{get, ServiceConfig};
use actix_web::HttpResponse;
use serde_json::json;

const SERVICE_NAME: &str = "catalog-api";

/// Registers `GET /` and `GET /health`. Neither touches the database.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("/", get().to(root))
        .route("/health", get().to(health));
}

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Catalog API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "healthy", "service": SERVICE_NAME }))
}
