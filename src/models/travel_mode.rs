//! Travel mode selection for directions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PathfinderError;

/// Direction-calculation profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walking,
    Driving,
    Transit,
}

impl TravelMode {
    /// All modes in the order the mode picker shows them
    pub const ALL: [TravelMode; 3] = [TravelMode::Walking, TravelMode::Transit, TravelMode::Driving];

    /// Lowercase name used in the `travelmode` query parameter
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
            TravelMode::Transit => "transit",
        }
    }

    /// Numeric code used in the `!3e` segment of a coordinate route
    #[must_use]
    pub fn mode_code(self) -> u8 {
        match self {
            TravelMode::Walking => 2,
            TravelMode::Driving => 0,
            TravelMode::Transit => 3,
        }
    }

    /// Human readable label for mode buttons
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Walking => "Walking",
            TravelMode::Driving => "Driving",
            TravelMode::Transit => "Public Transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = PathfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walking" => Ok(TravelMode::Walking),
            "driving" => Ok(TravelMode::Driving),
            "transit" => Ok(TravelMode::Transit),
            other => Err(PathfinderError::validation(format!(
                "Unknown travel mode '{other}'. Must be one of: walking, driving, transit"
            ))),
        }
    }
}
