//! Value Objects - Immutable, identity-less domain primitives

mod classification;
mod coordinate;

pub use classification::{COLD_THRESHOLD, Classification, HOT_THRESHOLD, classify};
pub use coordinate::Coordinate;
