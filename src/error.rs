use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps the two client-facing failure kinds to HTTP status codes with a
/// JSON body. Store operations themselves are total and never produce
/// errors; everything here is decided at the handler boundary.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or incomplete create payload
    InvalidPayload(String),
    /// Key not present in the store
    KeyNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidPayload(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid payload: {}", msg),
            ),
            ApiError::KeyNotFound(key) => {
                (StatusCode::NOT_FOUND, format!("Key not found: {}", key))
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::InvalidPayload(err.body_text())
    }
}
