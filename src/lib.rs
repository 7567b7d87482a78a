//! Pathfinder - trailhead and destination directions for Juneau
//!
//! The core is a pure classifier that sorts a location query into a
//! coordinate pair, a location code or free text, and a link builder that
//! turns the result into a Google Maps deep link for a travel mode.
//! Around it sit the place catalog, the explicit view state and an HTTP
//! surface for the kiosk frontend.

pub mod api;
pub mod catalog;
pub mod config;
pub mod directions;
pub mod error;
pub mod location_query;
pub mod logging;
pub mod models;
pub mod state;
pub mod web;

// Re-export core types for public API
pub use catalog::Catalog;
pub use config::PathfinderConfig;
pub use directions::{DirectionsLink, build_url, driving_url, transit_url, walking_url};
pub use error::PathfinderError;
pub use location_query::{LocationQuery, QueryKind, classify};
pub use models::{Destination, Place, Trailhead, TravelMode};
pub use state::{AppState, Swipe, View};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PathfinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
