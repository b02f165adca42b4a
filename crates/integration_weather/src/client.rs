//! NWS forecast client
//!
//! HTTP client for the two-step NWS lookup: `points` resolves a coordinate
//! to a grid forecast URL, which is then fetched for its periods.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ForecastResponse, Period, PointsResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be constructed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Weather service answered with a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// NWS API base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `User-Agent` sent with every request; NWS rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

fn default_user_agent() -> String {
    "weather-service-example".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching forecast data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Resolve a coordinate to the URL of its grid forecast
    async fn lookup_forecast_url(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, WeatherError>;

    /// Load the forecast periods behind a grid forecast URL
    async fn get_periods(&self, forecast_url: &str) -> Result<Vec<Period>, WeatherError>;

    /// Resolve a coordinate and load its forecast periods
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Period>, WeatherError> {
        let forecast_url = self.lookup_forecast_url(latitude, longitude).await?;
        self.get_periods(&forecast_url).await
    }
}

/// NWS HTTP client implementation
#[derive(Debug)]
pub struct NwsClient {
    client: Client,
    config: WeatherConfig,
}

impl NwsClient {
    /// Create a new NWS client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the points lookup URL, coordinates rounded to 4 decimals
    fn build_points_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/points/{latitude:.4},{longitude:.4}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// GET a URL and decode its JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for NwsClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn lookup_forecast_url(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, WeatherError> {
        let url = self.build_points_url(latitude, longitude);
        debug!(url = %url, "Looking up forecast grid");

        let points: PointsResponse = self.get_json(&url).await?;
        let forecast_url = points.properties.forecast;
        if forecast_url.is_empty() {
            return Err(WeatherError::ParseError(
                "Points response has an empty forecast URL".to_string(),
            ));
        }

        Ok(forecast_url)
    }

    #[instrument(skip(self))]
    async fn get_periods(&self, forecast_url: &str) -> Result<Vec<Period>, WeatherError> {
        debug!("Fetching grid forecast");

        let forecast: ForecastResponse = self.get_json(forecast_url).await?;
        debug!(count = forecast.properties.periods.len(), "Parsed forecast periods");

        Ok(forecast.properties.periods)
    }
}
