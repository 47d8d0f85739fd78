use crate::db::PractitionerStore;
use crate::services::error::ApiError;
use crate::services::{parse_id, run_blocking};
use actix_web::{web, HttpResponse};

const ENTITY: &str = "Practitioner";

/// Actix web handler for `GET /api/practitioners/{practitioner_id}`.
///
/// # Returns
/// - `200 OK` with the practitioner as a bare JSON object.
/// - `404 Not Found` when the id is unknown or not a positive integer.
pub async fn process(
    store: web::Data<PractitionerStore>,
    practitioner_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&practitioner_id, ENTITY)?;

    let practitioner = run_blocking("Error fetching practitioner", move || store.get_by_id(id))
        .await?
        .ok_or_else(|| ApiError::not_found(ENTITY))?;

    Ok(HttpResponse::Ok().json(practitioner))
}
