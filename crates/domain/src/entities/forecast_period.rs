//! A single forecast time window

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Length of the `YYYY-MM-DD` prefix of an ISO-8601 timestamp
const DATE_PREFIX_LEN: usize = 10;

/// A discrete forecast window ("Today", "Tonight", ...) as published upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Display name of the period
    pub name: String,
    /// ISO-8601 start timestamp, kept verbatim
    pub start_time: String,
    /// Forecast temperature
    pub temperature: i32,
    /// Unit of `temperature` (usually "F")
    pub temperature_unit: String,
    /// One-line forecast text
    pub short_forecast: String,
    /// Whether this is a daytime period
    pub is_daytime: bool,
}

impl ForecastPeriod {
    /// The `YYYY-MM-DD` prefix of the start timestamp
    ///
    /// Returns `None` when the timestamp is shorter than ten characters.
    #[must_use]
    pub fn start_date(&self) -> Option<&str> {
        self.start_time.get(..DATE_PREFIX_LEN)
    }

    /// Whether this is a daytime period starting on the given calendar date
    #[must_use]
    pub fn is_daytime_on(&self, date: NaiveDate) -> bool {
        self.is_daytime
            && self
                .start_date()
                .is_some_and(|d| d == date.format("%Y-%m-%d").to_string())
    }
}
