//! API Gateway error types.
//!
//! Every failed request answers with `{"success": false, "error": "..."}`
//! and an HTTP status chosen from the underlying error.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cc_04_catalog_service::CatalogError;
use serde::Serialize;
use shared_types::{HashParseError, PayloadError};
use std::fmt;

/// Error returned by a gateway route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status
    pub status: StatusCode,
    /// Error message
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Malformed or incomplete request
    pub fn bad_request(details: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, details)
    }

    /// A required body field is missing or empty
    pub fn required_field(field: &str) -> Self {
        Self::bad_request(format!("{field} is a required field"))
    }

    /// Unknown block or listing
    pub fn not_found(details: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, details)
    }

    /// The ledger cannot be reached
    pub fn unavailable(details: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, details)
    }

    /// Request timeout
    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::new(
            StatusCode::GATEWAY_TIMEOUT,
            format!("Request timeout: {}", operation.into()),
        )
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ApiError", 2)?;
        state.serialize_field("success", &false)?;
        state.serialize_field("error", &self.message)?;
        state.end()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

// Conversions from common error types

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        if e.is_not_found() {
            ApiError::not_found(e.to_string())
        } else if e.is_client_error() {
            ApiError::bad_request(e.to_string())
        } else {
            ApiError::unavailable(e.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError::new(status, rejection.body_text())
    }
}

impl From<PayloadError> for ApiError {
    fn from(e: PayloadError) -> Self {
        ApiError::bad_request(e.to_string())
    }
}

impl From<HashParseError> for ApiError {
    fn from(e: HashParseError) -> Self {
        ApiError::bad_request(format!("invalid block hash: {e}"))
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),

    /// Catalog context could not be built
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// The server task failed
    #[error("server error: {0}")]
    Server(String),

    /// `start` was called twice
    #[error("gateway already running")]
    AlreadyRunning,
}
