//! # HTTP Errors
//!
//! Translation of store and request errors into HTTP responses.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Error returned by the record store
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Path id is not an unsigned integer
    #[error("invalid id in url: {0}")]
    InvalidId(String),

    /// Body is not valid JSON for the expected payload
    #[error("invalid json: {0}")]
    InvalidBody(String),

    /// Body was sent without a JSON content type
    #[error("invalid media type, must be application/json")]
    UnsupportedMediaType,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Cancelled | StoreError::DeadlineExceeded) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    /// Machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Store(err) => err.code(),
            ApiError::InvalidId(_) => "INVALID_ID",
            ApiError::InvalidBody(_) => "INVALID_BODY",
            ApiError::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType,
            other => ApiError::InvalidBody(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidId(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(&self);

        let status_str = status.as_u16().to_string();
        let fields = [
            ("code", self.code()),
            ("error", body.error.as_str()),
            ("status", status_str.as_str()),
        ];
        if status.is_server_error() {
            Logger::error("REQUEST_FAILED", &fields);
        } else {
            Logger::warn("REQUEST_FAILED", &fields);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(StoreError::NotFound(1)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::validation("title required")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::Cancelled).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ApiError::from(StoreError::DeadlineExceeded).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ApiError::InvalidId("abc".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UnsupportedMediaType.status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_store_message_passes_through() {
        let err = ApiError::from(StoreError::validation("title required"));
        assert_eq!(err.to_string(), "validation failed: title required");
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(&ApiError::from(StoreError::NotFound(5)));
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "record 5 not found");
    }
}
