//! NWS wire models
//!
//! Only the fields the forecast lookup needs are modelled; everything else
//! in the GeoJSON documents is ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Response of `GET /points/{lat},{lon}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PointsProperties {
    /// URL of the grid forecast for this point
    pub forecast: String,
}

/// Response of the grid forecast endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<Period>,
}

/// One forecast period as published by NWS
///
/// Absent and `null` fields both decode to the type's zero value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// Display name ("Today", "Tonight", "Monday", ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// ISO-8601 start of the period, with the grid's UTC offset
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    /// Temperature in `temperature_unit`
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature: i32,
    /// "F" or "C"
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature_unit: String,
    /// One-line summary ("Sunny", "Chance Rain Showers")
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_forecast: String,
    /// Whether the period is daytime
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_daytime: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
