//! Google Maps deep links for a location query and travel mode

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::location_query::LocationQuery;
use crate::models::TravelMode;

const MAPS_BASE_URL: &str = "https://www.google.com/maps";
/// Zoom level for the map centred on a coordinate route
const COORDINATE_ZOOM: u8 = 15;

/// Characters left as-is by URI component encoding: alphanumerics plus
/// `- _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Fully formed, percent-encoded directions URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DirectionsLink(String);

impl DirectionsLink {
    /// Build the link for an already classified query.
    ///
    /// Location codes have no per-mode deep link, so `mode` is ignored for
    /// that branch.
    pub fn for_query(query: &LocationQuery, mode: TravelMode) -> Self {
        let url = match query {
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => {
                // Adding 0.0 turns -0.0 into 0.0
                let (latitude, longitude) = (latitude + 0.0, longitude + 0.0);
                format!(
                    "{MAPS_BASE_URL}/dir//{latitude},{longitude}/@{latitude},{longitude},{COORDINATE_ZOOM}z/data=!4m2!4m1!3e{}",
                    mode.mode_code()
                )
            }
            LocationQuery::LocationCode(raw) => {
                format!("{MAPS_BASE_URL}/place/{}", encode_component(raw))
            }
            LocationQuery::FreeText(raw) => format!(
                "{MAPS_BASE_URL}/dir/?api=1&destination={}&travelmode={mode}",
                encode_component(raw)
            ),
        };
        Self(url)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DirectionsLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DirectionsLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<DirectionsLink> for String {
    fn from(link: DirectionsLink) -> Self {
        link.0
    }
}

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Classify `query` and build its directions link for `mode`
pub fn build_url(query: &str, mode: TravelMode) -> DirectionsLink {
    DirectionsLink::for_query(&LocationQuery::classify(query), mode)
}

pub fn walking_url(query: &str) -> DirectionsLink {
    build_url(query, TravelMode::Walking)
}

pub fn driving_url(query: &str) -> DirectionsLink {
    build_url(query, TravelMode::Driving)
}

pub fn transit_url(query: &str) -> DirectionsLink {
    build_url(query, TravelMode::Transit)
}
