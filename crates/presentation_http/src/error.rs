//! API error handling
//!
//! Every failure is converted at the handler boundary into a JSON body of
//! the shape `{error, message, details?}` with the operator-facing strings
//! the relay has always returned. Nothing here panics the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integration_cwa::CwaError;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream credential missing; operator-recoverable, not user error
    #[error("CWA API key is not configured")]
    Configuration,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream reachable but returned an error status; the status is
    /// propagated to the relay's client as-is
    #[error("Upstream error {status}: {message}")]
    Upstream {
        status: u16,
        message: String,
        details: Value,
    },

    /// Network-level or otherwise unstructured failure
    #[error("Internal error")]
    Internal,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error taxonomy tag
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Raw upstream error body, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = match self {
            Self::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "伺服器設定錯誤",
                "請在設定檔或環境變數中設定 CWA_API_KEY".to_string(),
                None,
            ),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, "請求錯誤", message, None),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, "查無資料", message, None),
            Self::Upstream {
                status,
                message,
                details,
            } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                "CWA API 錯誤",
                message,
                Some(details),
            ),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "伺服器錯誤",
                "無法取得天氣資料，請稍後再試".to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CwaError> for ApiError {
    fn from(err: CwaError) -> Self {
        match err {
            CwaError::MissingCredential => Self::Configuration,
            CwaError::UpstreamStatus {
                status,
                message,
                details,
            } => Self::Upstream {
                status,
                message,
                details,
            },
            CwaError::RequestFailed(_) | CwaError::ParseError(_) => Self::Internal,
        }
    }
}
