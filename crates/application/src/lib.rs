//! Application layer - Use cases and orchestration
//!
//! Contains the forecast resolution use case and the port it depends on.
//! Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
