//! Forecast classification handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::{Coordinate, WeatherResult};
use tracing::{debug, error, info, instrument};

use crate::{error::ApiError, state::AppState};

/// Raw query pairs; repeated keys resolve to their first occurrence
pub type WeatherQuery = Vec<(String, String)>;

fn first_value<'a>(query: &'a WeatherQuery, key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// `GET /weather?lat=<float>&lon=<float>`
///
/// Answers with today's short forecast and its temperature classification.
#[instrument(skip(state, query))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherResult>, ApiError> {
    let coordinate = Coordinate::parse(first_value(&query, "lat"), first_value(&query, "lon"))
        .map_err(|e| {
            debug!(error = %e, "Rejected weather query");
            ApiError::from(e)
        })?;

    let result = state
        .forecast_service
        .resolve(&coordinate)
        .await
        .map_err(|e| {
            error!(error = %e, coordinate = %coordinate, "Error fetching forecast");
            ApiError::from(e)
        })?;

    info!(
        coordinate = %coordinate,
        temperature = result.temperature,
        classification = %result.classification,
        "Forecast classified"
    );

    Ok(Json(result))
}
