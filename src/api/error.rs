//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use uuid::Uuid;

use crate::service::assessment::AssessmentError;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// A simulation run is already in flight (409)
    #[error("a simulation run is already in progress")]
    RunInProgress,

    /// Assessment backend has no credentials (503)
    #[error("assessment unavailable: {0}")]
    NotConfigured(String),

    /// Upstream model failure or unusable payload (502)
    #[error("external service error: {0}")]
    ExternalService(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::RunInProgress => StatusCode::CONFLICT,
            ApiError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::RunInProgress => "run_in_progress",
            ApiError::NotConfigured(_) => "not_configured",
            ApiError::ExternalService(_) => "external_service_error",
            ApiError::Internal(_) => "internal_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<AssessmentError> for ApiError {
    fn from(err: AssessmentError) -> Self {
        let message = err.to_string();
        match err {
            AssessmentError::NotConfigured => ApiError::NotConfigured(message),
            // Both failure kinds reach the caller as an upstream failure;
            // the finer distinction lives in the logs
            _ => ApiError::ExternalService(message),
        }
    }
}
