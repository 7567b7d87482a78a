//! Data models for the Pathfinder application
//!
//! - TravelMode: the closed set of direction profiles
//! - Place: destinations and trailheads a user can pick

pub mod place;
pub mod travel_mode;

pub use place::{Destination, Place, Trailhead};
pub use travel_mode::TravelMode;
