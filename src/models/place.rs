//! Named places a user can pick from

use serde::{Deserialize, Serialize};

use crate::directions::{self, DirectionsLink};
use crate::models::TravelMode;

/// Anything with a display name and a location query
pub trait Place {
    fn name(&self) -> &str;
    fn query(&self) -> &str;

    /// Directions link to this place for `mode`
    fn directions(&self, mode: TravelMode) -> DirectionsLink {
        directions::build_url(self.query(), mode)
    }
}

/// A landmark or business in town
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    /// Address, coordinate pair or location code
    pub query: String,
}

/// A hiking trailhead with road and access details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailhead {
    pub name: String,
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milemarker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Link to the trail description this entry was taken from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Destination {
    #[must_use]
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
        }
    }
}

impl Trailhead {
    #[must_use]
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
            milemarker: None,
            notes: None,
            source: None,
        }
    }

    #[must_use]
    pub fn with_milemarker(mut self, milemarker: impl Into<String>) -> Self {
        self.milemarker = Some(milemarker.into());
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Place for Destination {
    fn name(&self) -> &str {
        &self.name
    }

    fn query(&self) -> &str {
        &self.query
    }
}

impl Place for Trailhead {
    fn name(&self) -> &str {
        &self.name
    }

    fn query(&self) -> &str {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_directions_use_query() {
        let dest = Destination::new("Mt. Juneau Trailhead", "58.308126, -134.386518");
        let url = dest.directions(TravelMode::Transit);
        assert!(url.as_str().ends_with("!3e3"));
    }

    #[test]
    fn test_trailhead_optional_fields_skipped_when_absent() {
        let trailhead = Trailhead::new("West Glacier Trail", "West Glacier Trail, Juneau, AK 99801");
        let json = serde_json::to_value(&trailhead).unwrap();
        assert!(json.get("milemarker").is_none());
        assert!(json.get("notes").is_none());

        let trailhead = trailhead.with_milemarker("MM 12.8").with_notes("West side");
        let json = serde_json::to_value(&trailhead).unwrap();
        assert_eq!(json["milemarker"], "MM 12.8");
        assert_eq!(json["notes"], "West side");
    }
}
