use super::DEFAULT_LIMIT;
use crate::db::PractitionerStore;
use crate::services::error::ApiError;
use crate::services::{required, run_blocking};
use actix_web::{web, HttpResponse};
use common::requests::SearchQuery;
use common::responses::PractitionerResponse;

/// Actix web handler for `GET /api/practitioners/search?q=...`.
///
/// Matches `q` against name or specialty. A missing `q` is a `400`.
pub async fn process(
    store: web::Data<PractitionerStore>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let text = required(query.q, "q")?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let practitioners = run_blocking("Error searching practitioners", move || {
        store.search_text(&text)
    })
    .await?;

    Ok(HttpResponse::Ok().json(PractitionerResponse::limited(practitioners, limit)))
}
