//! Location query classification
//!
//! Free-form location descriptors come in three shapes: a decimal-degree
//! coordinate pair, a plus-separated location code, or an address/place
//! name. Classification is ordered first-match and never fails.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// `lat,lng` with optional whitespace after the comma. ASCII digits only.
static COORDINATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]+\.?[0-9]*),\s*(-?[0-9]+\.?[0-9]*)$")
        .expect("coordinate pattern is a valid regex")
});

/// Classified location query
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Decimal degrees, not range checked
    Coordinates { latitude: f64, longitude: f64 },
    /// Opaque location code such as `G5HV+96`, kept verbatim
    LocationCode(String),
    /// Street address or place name, kept verbatim
    FreeText(String),
}

/// Tag naming which branch a query fell into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Coordinates,
    LocationCode,
    FreeText,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QueryKind::Coordinates => "coordinates",
            QueryKind::LocationCode => "location_code",
            QueryKind::FreeText => "free_text",
        })
    }
}

impl LocationQuery {
    /// Classify a raw query string.
    ///
    /// Coordinates are tested first, then `+` containment, then everything
    /// else is free text. A coordinate-shaped string containing `+` cannot
    /// occur since the coordinate pattern rejects `+`.
    pub fn classify(query: &str) -> Self {
        let classified = if let Some((latitude, longitude)) = Self::parse_coordinates(query) {
            LocationQuery::Coordinates {
                latitude,
                longitude,
            }
        } else if Self::is_location_code(query) {
            LocationQuery::LocationCode(query.to_string())
        } else {
            LocationQuery::FreeText(query.to_string())
        };

        debug!(query, kind = %classified.kind(), "Classified location query");
        classified
    }

    /// Which branch this query fell into
    #[must_use]
    pub fn kind(&self) -> QueryKind {
        match self {
            LocationQuery::Coordinates { .. } => QueryKind::Coordinates,
            LocationQuery::LocationCode(_) => QueryKind::LocationCode,
            LocationQuery::FreeText(_) => QueryKind::FreeText,
        }
    }

    /// Parse `lat,lng` if the whole string is a coordinate pair
    fn parse_coordinates(query: &str) -> Option<(f64, f64)> {
        let captures = COORDINATES.captures(query)?;
        // The pattern only admits well-formed numerals, so both parses succeed.
        let latitude = captures.get(1)?.as_str().parse::<f64>().ok()?;
        let longitude = captures.get(2)?.as_str().parse::<f64>().ok()?;
        Some((latitude, longitude))
    }

    fn is_location_code(query: &str) -> bool {
        query.contains('+')
    }
}

/// Classify a raw query string. See [`LocationQuery::classify`].
pub fn classify(query: &str) -> LocationQuery {
    LocationQuery::classify(query)
}
