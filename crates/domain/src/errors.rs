//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// The display text of each variant is the exact message returned to
/// HTTP clients, so it must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Latitude or longitude was not supplied
    #[error("Missing lat or lon parameter")]
    MissingCoordinate,

    /// Latitude could not be parsed as a floating-point number
    #[error("Invalid latitude")]
    InvalidLatitude,

    /// Longitude could not be parsed as a floating-point number
    #[error("Invalid longitude")]
    InvalidLongitude,
}
