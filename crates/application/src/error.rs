//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Transport or HTTP failure talking to the upstream weather service
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Upstream response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Upstream returned a forecast without any periods
    #[error("Forecast contains no periods")]
    EmptyForecast,
}
