//! # Practitioner Service Module
//!
//! Routes under `/api/practitioners`.
//!
//! ## Sub-modules:
//! - `list`: all practitioners, optionally filtered by specialty and location.
//! - `search`: free-text search over name and specialty.
//! - `get`: a single practitioner by id.

mod get;
mod list;
mod search;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all practitioner endpoints.
const API_PATH: &str = "/api/practitioners";

/// Page size used when the request has no `limit`.
const DEFAULT_LIMIT: usize = 10;

/// Configures and returns the Actix `Scope` for the practitioner routes.
///
/// `/search` is registered before `/{practitioner_id}` so it is not captured by the id route.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/search", get().to(search::process))
        .route("/{practitioner_id}", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use crate::db::testing::seeded_stores;
    use crate::services;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::practitioner::Practitioner;
    use common::responses::PractitionerResponse;

    macro_rules! app {
        ($practitioners:expr, $products:expr) => {
            test::init_service(
                App::new().configure(services::configure($practitioners, $products)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn list_returns_everything_under_default_limit() {
        let (_dir, practitioners, products) = seeded_stores();
        let app = app!(practitioners, products);

        let req = test::TestRequest::get().uri("/api/practitioners").to_request();
        let body: PractitionerResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, 5);
        assert_eq!(body.practitioners.len(), 5);
    }

    #[actix_web::test]
    async fn specialty_filter_finds_ayurvedic_practitioner() {
        let (_dir, practitioners, products) = seeded_stores();
        let app = app!(practitioners, products);

        let req = test::TestRequest::get()
            .uri("/api/practitioners?specialty=Ayurvedic")
            .to_request();
        let body: PractitionerResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, 1);
        assert_eq!(body.practitioners[0].name, "Dr. Priya Sharma");
        assert_eq!(body.practitioners[0].specialty, "Ayurvedic Medicine");
    }

    #[actix_web::test]
    async fn limit_truncates_but_total_counts_all_matches() {
        let (_dir, practitioners, products) = seeded_stores();
        let app = app!(practitioners, products);

        let req = test::TestRequest::get()
            .uri("/api/practitioners?location=center&limit=2")
            .to_request();
        let body: PractitionerResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, 3);
        let names: Vec<&str> = body.practitioners.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Priya Sharma", "Dr. Maya Joshi"]);
    }

    #[actix_web::test]
    async fn whitespace_filters_are_matched_not_ignored() {
        let (_dir, practitioners, products) = seeded_stores();
        let app = app!(practitioners, products);

        for uri in [
            "/api/practitioners?specialty=%20%20",
            "/api/practitioners/search?q=%20%20",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body: PractitionerResponse = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body.total, 0, "{uri}");
            assert!(body.practitioners.is_empty(), "{uri}");
        }

        let req = test::TestRequest::get()
            .uri("/api/practitioners?specialty=")
            .to_request();
        let body: PractitionerResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.total, 5);
    }

    #[actix_web::test]
    async fn invalid_limit_is_a_client_error() {
        let (_dir, practitioners, products) = seeded_stores();
        let app = app!(practitioners, products);

        let req = test::TestRequest::get()
            .uri("/api/practitioners?limit=many")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn get_by_id_returns_bare_object() {
        let (_dir, practitioners, products) = seeded_stores();
        let app = app!(practitioners, products);

        let req = test::TestRequest::get().uri("/api/practitioners/3").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["id"], 3);
        assert_eq!(body["nextAvailable"], "Today 4:30 PM");
        let practitioner: Practitioner = serde_json::from_value(body).unwrap();
        assert_eq!(practitioner.name, "Dr. Maya Joshi");
    }

    #[actix_web::test]
    async fn unknown_or_malformed_id_is_not_found() {
        let (_dir, practitioners, products) = seeded_stores();
        let app = app!(practitioners, products);

        for uri in ["/api/practitioners/999", "/api/practitioners/abc", "/api/practitioners/0"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[actix_web::test]
    async fn search_matches_name_or_specialty() {
        let (_dir, practitioners, products) = seeded_stores();
        let app = app!(practitioners, products);

        let req = test::TestRequest::get()
            .uri("/api/practitioners/search?q=therapy&limit=1")
            .to_request();
        let body: PractitionerResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, 2);
        assert_eq!(body.practitioners.len(), 1);
        assert_eq!(body.practitioners[0].name, "Dr. Rajesh Patel");
    }

    #[actix_web::test]
    async fn search_without_q_is_rejected() {
        let (_dir, practitioners, products) = seeded_stores();
        let app = app!(practitioners, products);

        let req = test::TestRequest::get()
            .uri("/api/practitioners/search")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing required parameter: q");
    }

    #[actix_web::test]
    async fn storage_failure_is_a_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = crate::db::Database::new(dir.path().join("missing").join("catalog.db"));
        let app = app!(
            crate::db::PractitionerStore::new(db.clone()),
            crate::db::ProductStore::new(db)
        );

        let req = test::TestRequest::get().uri("/api/practitioners").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Error fetching practitioners: database could not be opened"
        );
    }
}
