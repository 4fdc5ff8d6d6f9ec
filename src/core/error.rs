//! Typed error handling for the request pipeline
//!
//! Every failure a validation chain, guard, or mutator can produce is an
//! [`ApiError`]. Pipeline code signals failure by returning the value; the
//! axum integration renders it as `{"error": "<message>"}` with the matching
//! HTTP status. The pipeline never writes failure responses itself.
//!
//! # Error Categories
//!
//! - `Validation`: malformed, missing, or invalid field; business-rule violation (400)
//! - `NotFound`: referenced id absent from the backing collection (404)
//! - `DeleteConflict`: delete attempted on an order that is not pending (400)
//! - `Internal`: ambient failures that should not happen in normal operation (500)

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The error type for the request pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed, missing, or invalid field; business-rule violation
    Validation(String),

    /// Referenced id absent from the backing collection
    NotFound(String),

    /// Delete attempted on a record whose state forbids it
    DeleteConflict(String),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn delete_conflict(message: impl Into<String>) -> Self {
        ApiError::DeleteConflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DeleteConflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The human-readable message carried by this error
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg)
            | ApiError::NotFound(msg)
            | ApiError::DeleteConflict(msg)
            | ApiError::Internal(msg) => msg,
        }
    }

    /// Convert to the response body rendered by the transport
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.message().to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_body());
        (status, body).into_response()
    }
}

/// Repository failures (poisoned locks) surface as internal errors
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// A specialized Result type for pipeline operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_returns_400() {
        let err = ApiError::validation("Dish must include a name");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_returns_404() {
        let err = ApiError::not_found("Dish does not exist: abc.");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_delete_conflict_returns_400() {
        let err = ApiError::delete_conflict("An order cannot be deleted unless it is pending");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_returns_500() {
        let err = ApiError::internal("poisoned lock");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_is_the_message() {
        let err = ApiError::validation("Order must include a deliverTo");
        assert_eq!(err.to_string(), "Order must include a deliverTo");
    }

    #[test]
    fn test_body_carries_the_message() {
        let err = ApiError::not_found("Order does not exist: 42.");
        let body = err.to_body();
        assert_eq!(body.error, "Order does not exist: 42.");
    }

    #[test]
    fn test_from_anyhow_is_internal() {
        let err: ApiError = anyhow::anyhow!("Failed to acquire write lock").into();
        assert!(matches!(err, ApiError::Internal(_)));
        assert!(err.message().contains("write lock"));
    }
}
