//! Domain entities - Request-scoped forecast records

mod forecast_period;
mod weather_result;

pub use forecast_period::ForecastPeriod;
pub use weather_result::WeatherResult;
