//! Forecast resolution service
//!
//! Turns a coordinate into today's classified forecast: fetch the periods
//! through the forecast port, pick the applicable one, classify it.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use domain::{Coordinate, ForecastPeriod, WeatherResult};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ForecastPort};

/// Pick the period that describes `today`
///
/// The first daytime period starting on `today` wins. When none matches, the
/// first period is used regardless of date or daytime flag. Returns `None`
/// only for an empty slice.
pub fn select_period(periods: &[ForecastPeriod], today: NaiveDate) -> Option<&ForecastPeriod> {
    periods
        .iter()
        .find(|p| p.is_daytime_on(today))
        .or_else(|| periods.first())
}

/// Resolves coordinates to a classified forecast
pub struct ForecastService {
    forecasts: Arc<dyn ForecastPort>,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService")
            .field("forecasts", &"<ForecastPort>")
            .finish()
    }
}

impl ForecastService {
    /// Create a new service on top of a forecast port
    pub fn new(forecasts: Arc<dyn ForecastPort>) -> Self {
        Self { forecasts }
    }

    /// Resolve today's forecast using the server's local date
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_on`].
    pub async fn resolve(&self, coordinate: &Coordinate) -> Result<WeatherResult, ApplicationError> {
        self.resolve_on(coordinate, Local::now().date_naive()).await
    }

    /// Resolve the forecast for `coordinate` as seen on `today`
    ///
    /// # Errors
    ///
    /// Propagates upstream and decode errors from the port, and returns
    /// `EmptyForecast` when the upstream forecast has no periods.
    #[instrument(skip(self, coordinate), fields(coordinate = %coordinate))]
    pub async fn resolve_on(
        &self,
        coordinate: &Coordinate,
        today: NaiveDate,
    ) -> Result<WeatherResult, ApplicationError> {
        let periods = self.forecasts.get_periods(coordinate).await?;
        debug!(count = periods.len(), "Fetched forecast periods");

        let period = select_period(&periods, today).ok_or(ApplicationError::EmptyForecast)?;
        debug!(
            period = %period.name,
            start_time = %period.start_time,
            is_daytime = period.is_daytime,
            "Selected forecast period"
        );

        Ok(WeatherResult::from(period))
    }
}
