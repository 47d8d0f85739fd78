//! Error type returned by every handler and its mapping to HTTP responses.
//!
//! - `NotFound` → `404 Not Found`
//! - `Validation` → `400 Bad Request`
//! - `StorageUnavailable` → `500 Internal Server Error`
//!
//! Bodies are JSON: `{ "error": "<message>", "code": <status> }`.

use crate::db::StoreError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{debug, error};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("{context}: {cause}")]
    StorageUnavailable {
        context: &'static str,
        cause: &'static str,
    },
}

impl ApiError {
    /// Logs the full store error and keeps only its short cause for the client.
    pub fn storage(context: &'static str, err: StoreError) -> Self {
        error!("{}: {}", context, err);
        ApiError::StorageUnavailable {
            context,
            cause: err.cause(),
        }
    }

    pub fn not_found(entity: &'static str) -> Self {
        debug!("{} not found", entity);
        ApiError::NotFound(entity)
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    code: u16,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::StorageUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use std::path::PathBuf;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::NotFound("Product").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        let storage = ApiError::StorageUnavailable {
            context: "Error fetching products",
            cause: "query execution failed",
        };
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_error_hides_internal_detail() {
        let err = ApiError::storage(
            "Error fetching practitioners",
            StoreError::Open {
                path: PathBuf::from("/secret/location/catalog.db"),
                source: rusqlite::Error::InvalidQuery,
            },
        );
        let message = err.to_string();
        assert_eq!(message, "Error fetching practitioners: database could not be opened");
        assert!(!message.contains("/secret"));
    }

    #[actix_web::test]
    async fn error_body_is_json() {
        let response = ApiError::NotFound("Practitioner").error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Practitioner not found");
        assert_eq!(body["code"], 404);
    }
}
