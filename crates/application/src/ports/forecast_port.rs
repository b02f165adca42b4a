//! Forecast retrieval port
//!
//! Defines the interface for fetching forecast periods for a coordinate.

use async_trait::async_trait;
use domain::{Coordinate, ForecastPeriod};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for upstream forecast lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the ordered forecast periods covering a coordinate
    ///
    /// Implementations resolve the coordinate's forecast grid first and then
    /// load that grid's periods, in upstream order.
    async fn get_periods(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Vec<ForecastPeriod>, ApplicationError>;
}
