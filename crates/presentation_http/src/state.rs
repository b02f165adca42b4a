//! Application state shared across handlers

use std::sync::Arc;

use application::ForecastService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Resolves coordinates to today's classified forecast
    pub forecast_service: Arc<ForecastService>,
}

impl AppState {
    /// Create state around a forecast service
    pub fn new(forecast_service: ForecastService) -> Self {
        Self {
            forecast_service: Arc::new(forecast_service),
        }
    }
}
