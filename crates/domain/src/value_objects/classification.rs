//! Temperature classification
//!
//! Maps a forecast temperature onto one of three coarse buckets.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{Classification, classify};
//!
//! assert_eq!(classify(85), Classification::Hot);
//! assert_eq!(classify(65), Classification::Moderate);
//! assert_eq!(classify(50), Classification::Cold);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperatures at or above this value are hot
pub const HOT_THRESHOLD: i32 = 80;

/// Temperatures at or below this value are cold
pub const COLD_THRESHOLD: i32 = 50;

/// Coarse temperature bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Hot,
    Cold,
    Moderate,
}

impl Classification {
    /// Lowercase label used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::Moderate => "moderate",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a temperature; both thresholds are inclusive
#[must_use]
pub const fn classify(temperature: i32) -> Classification {
    if temperature >= HOT_THRESHOLD {
        Classification::Hot
    } else if temperature <= COLD_THRESHOLD {
        Classification::Cold
    } else {
        Classification::Moderate
    }
}
