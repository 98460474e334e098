//! HTTP request and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::service::ResearchError;

// ============================================================================
// Research types
// ============================================================================

/// Request body for POST /research.
#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    /// Topic to research.
    pub topic: String,

    /// One of "summary", "bullet points", "short report".
    pub output_format: String,
}

/// Successful research response.
#[derive(Debug, Serialize)]
pub struct ResearchResponse {
    pub result: String,
}

/// Usage message returned by the root endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ============================================================================
// Error types
// ============================================================================

/// Error response: `{"detail": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<T> {
    pub detail: T,
}

/// Structured detail of a failed research request.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Request rejected before reaching the research service.
#[derive(Debug)]
pub struct ValidationError {
    pub message: String,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                detail: self.message,
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ResearchError {
    fn into_response(self) -> Response {
        let detail = match self {
            ResearchError::NotInitialized => ErrorDetail {
                error: ResearchError::NotInitialized.to_string(),
                details: None,
            },
            ResearchError::Execution(failure) => ErrorDetail {
                error: failure.message(),
                details: Some(failure.details),
            },
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { detail }),
        )
            .into_response()
    }
}
