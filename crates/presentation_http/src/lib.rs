//! HTTP presentation layer
//!
//! Exposes the classified forecast over HTTP.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestId, RequestIdLayer};
pub use routes::create_router;
pub use state::AppState;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str =
    "weather_server=info,presentation_http=info,tower_http=info";
