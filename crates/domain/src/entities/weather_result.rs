//! Classified forecast returned to clients

use serde::{Deserialize, Serialize};

use crate::entities::ForecastPeriod;
use crate::value_objects::{Classification, classify};

/// Today's short forecast with its temperature bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherResult {
    /// Short forecast text of the selected period
    pub forecast: String,
    /// Temperature of the selected period
    pub temperature: i32,
    /// Bucket derived from `temperature`
    pub classification: Classification,
}

impl From<&ForecastPeriod> for WeatherResult {
    fn from(period: &ForecastPeriod) -> Self {
        Self {
            forecast: period.short_forecast.clone(),
            temperature: period.temperature,
            classification: classify(period.temperature),
        }
    }
}
