//! Weather adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::{Coordinate, ForecastPeriod};
use integration_weather::{NwsClient, Period, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for forecast lookups against the NWS API
#[derive(Debug)]
pub struct WeatherAdapter {
    client: NwsClient,
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = NwsClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::Upstream(e),
            WeatherError::ParseError(e) => ApplicationError::Decode(e),
        }
    }

    /// Convert a wire period into the domain representation
    fn map_period(period: Period) -> ForecastPeriod {
        ForecastPeriod {
            name: period.name,
            start_time: period.start_time,
            temperature: period.temperature,
            temperature_unit: period.temperature_unit,
            short_forecast: period.short_forecast,
            is_daytime: period.is_daytime,
        }
    }
}

#[async_trait]
impl ForecastPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn get_periods(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Vec<ForecastPeriod>, ApplicationError> {
        let result = self
            .client
            .get_forecast(coordinate.latitude(), coordinate.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(periods) => debug!(count = periods.len(), "Retrieved forecast periods"),
            Err(e) => debug!(error = %e, "Failed to get forecast periods"),
        }

        result.map(|periods| periods.into_iter().map(Self::map_period).collect())
    }
}
