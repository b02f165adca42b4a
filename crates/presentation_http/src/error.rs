//! API error handling
//!
//! Client mistakes are answered with their exact validation message. Every
//! other failure collapses into one generic message so upstream details never
//! reach the caller; the cause is logged where it happens.

use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use thiserror::Error;

/// Body returned for any failure behind the query validation
pub const FORECAST_FAILURE_MESSAGE: &str = "Failed to fetch forecast";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Query parameters were missing or malformed
    #[error("{0}")]
    BadRequest(String),

    /// Forecast resolution failed
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::BadRequest(message) => (status, message).into_response(),
            Self::Internal(_) => (status, FORECAST_FAILURE_MESSAGE).into_response(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => e.into(),
            other => Self::Internal(other.to_string()),
        }
    }
}
