//! API error types with IntoResponse
//!
//! Errors are converted to JSON bodies of the form `{"error": <message>}`
//! with the status code the endpoint promises. The same storage failure
//! maps differently by endpoint: catalog endpoints answer 500 with a
//! generic body, order placement answers 400 and echoes the message.
//! Handlers pick the mapping with `ApiError::Catalog` / `ApiError::Order`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Catalog operation failed (500, logged, generic body)
    Catalog(DbError),

    /// Order placement failed (400, message echoed)
    Order(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Catalog(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            Self::Order(e) => {
                match e {
                    DbError::ProductNotFound { id } => {
                        tracing::warn!(product_id = id, "order rejected: product not found");
                    }
                    DbError::InsufficientStock {
                        requested,
                        available,
                    } => {
                        tracing::warn!(requested, available, "order rejected: not enough stock");
                    }
                    DbError::Sqlx(source) => {
                        tracing::error!("Database error during order placement: {}", source);
                    }
                }
                (StatusCode::BAD_REQUEST, e.to_string())
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
