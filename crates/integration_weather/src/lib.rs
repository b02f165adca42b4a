//! National Weather Service integration
//!
//! Client for the NWS API (<https://api.weather.gov>).
//! Resolves a coordinate to its forecast grid and loads that grid's forecast periods.

pub mod client;
mod models;

pub use client::{NwsClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::Period;
