//! Coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A latitude/longitude pair in decimal degrees
///
/// No range validation is applied: any value that parses as an `f64` is
/// accepted and handed to the upstream service as-is. Literals too large for
/// an `f64` are rejected rather than rounded to infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from already-parsed values
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a coordinate from raw query parameter values
    ///
    /// Checks run in a fixed order: presence of both values first, then the
    /// latitude, then the longitude. An empty string counts as missing.
    ///
    /// # Errors
    ///
    /// Returns `MissingCoordinate`, `InvalidLatitude` or `InvalidLongitude`.
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Result<Self, DomainError> {
        let (Some(lat), Some(lon)) = (
            latitude.filter(|s| !s.is_empty()),
            longitude.filter(|s| !s.is_empty()),
        ) else {
            return Err(DomainError::MissingCoordinate);
        };

        let latitude = parse_degrees(lat).ok_or(DomainError::InvalidLatitude)?;
        let longitude = parse_degrees(lon).ok_or(DomainError::InvalidLongitude)?;

        Ok(Self::new(latitude, longitude))
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

}

/// Parse one decimal-degree value
///
/// Infinity is only accepted when spelled out (`inf`, `-Infinity`, ...);
/// a finite literal that overflows `f64` is not a number we can look up.
fn parse_degrees(raw: &str) -> Option<f64> {
    let value = raw.parse::<f64>().ok()?;
    if value.is_infinite() {
        let unsigned = raw.trim_start_matches(['+', '-']);
        let spelled =
            unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity");
        return spelled.then_some(value);
    }
    Some(value)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
