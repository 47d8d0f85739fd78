use super::DEFAULT_LIMIT;
use crate::db::{PractitionerCriteria, PractitionerStore};
use crate::services::error::ApiError;
use crate::services::run_blocking;
use actix_web::{web, HttpResponse};
use common::requests::PractitionerListQuery;
use common::responses::PractitionerResponse;

/// Actix web handler for `GET /api/practitioners`.
///
/// Without a non-blank `specialty` or `location` the whole collection is listed;
/// otherwise both filters must match. The result is cut to `limit` entries while
/// `total` keeps the full count.
pub async fn process(
    store: web::Data<PractitionerStore>,
    query: web::Query<PractitionerListQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let criteria = PractitionerCriteria {
        specialty: query.specialty,
        location: query.location,
    };

    let practitioners = run_blocking("Error fetching practitioners", move || {
        if criteria.is_empty() {
            store.list_all()
        } else {
            store.search(&criteria)
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(PractitionerResponse::limited(practitioners, limit)))
}
