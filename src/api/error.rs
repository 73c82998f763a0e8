//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::analysis::{AnalysisError, ErrorClassification};

/// Error code for quota exhaustion. Upper-case because the dashboard matches
/// on this literal.
pub const QUOTA_EXCEEDED_CODE: &str = "API_QUOTA_EXCEEDED";

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
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
    /// Model API quota or rate limit exhausted (429)
    #[error("{0}")]
    QuotaExceeded(String),

    /// Model API call failed for any other reason (500)
    #[error("{0}")]
    Upstream(String),

    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn error_type(&self) -> &'static str {
        match self {
            ApiError::QuotaExceeded(_) => QUOTA_EXCEEDED_CODE,
            ApiError::Upstream(_) => "upstream_error",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::QuotaExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = self.error_type();

        if status.is_server_error() {
            tracing::error!(
                error_type = error_type,
                status = status.as_u16(),
                message = %self,
                "API error"
            );
        } else {
            tracing::warn!(
                error_type = error_type,
                status = status.as_u16(),
                message = %self,
                "API error"
            );
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err.classification() {
            ErrorClassification::QuotaExceeded => ApiError::QuotaExceeded(err.to_string()),
            ErrorClassification::TransientUpstream | ErrorClassification::Unclassified => {
                ApiError::Upstream(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisKind;
    use crate::service::llm::LlmError;
    use actix_web::body::to_bytes;

    #[test]
    fn test_quota_maps_to_429() {
        let err = AnalysisError::from_upstream(
            AnalysisKind::Sentiment,
            &LlmError::InvalidResponse("You exceeded your current quota".to_string()),
        );
        let api: ApiError = err.into();
        assert_eq!(api.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_transient_maps_to_500() {
        let err = AnalysisError::from_upstream(
            AnalysisKind::Summary,
            &LlmError::Timeout("operation timed out".to_string()),
        );
        let api: ApiError = err.into();
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api.to_string().starts_with("Text summarization failed: "));
    }

    #[actix_web::test]
    async fn test_error_body_shape() {
        let response = ApiError::QuotaExceeded("quota".to_string()).error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], QUOTA_EXCEEDED_CODE);
        assert_eq!(body["message"], "quota");
        assert!(Uuid::parse_str(body["request_id"].as_str().unwrap()).is_ok());
    }

    #[actix_web::test]
    async fn test_internal_error_body() {
        let err = ApiError::Internal("yaml rendering failed".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "Internal server error: yaml rendering failed");
    }
}
