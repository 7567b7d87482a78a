//! Application state for the two finder views
//!
//! The state is an explicit value owned by whoever renders it (the web
//! server keeps one behind a lock). The link builder never reads it; the
//! current URL is recomputed here from `(query, mode)` whenever either
//! changes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::directions::DirectionsLink;
use crate::models::{Destination, Place, Trailhead, TravelMode};
use crate::{PathfinderError, Result};

/// Minimum horizontal travel in pixels for a touch to count as a swipe
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;

/// Screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Destination picker
    Pathfinder,
    /// Trailhead picker
    Trailheads,
}

/// Horizontal swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swipe {
    Left,
    Right,
}

impl Swipe {
    /// Interpret a touch that started at `start_x` and ended at `end_x`
    #[must_use]
    pub fn from_touch(start_x: f64, end_x: f64) -> Option<Self> {
        let distance = start_x - end_x;
        if distance > MIN_SWIPE_DISTANCE {
            Some(Swipe::Left)
        } else if distance < -MIN_SWIPE_DISTANCE {
            Some(Swipe::Right)
        } else {
            None
        }
    }
}

/// Selection, travel mode and resulting link for one finder view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinderState<P> {
    pub travel_mode: TravelMode,
    pub selected: Option<P>,
    pub url: Option<DirectionsLink>,
}

impl<P: Place> FinderState<P> {
    #[must_use]
    pub fn new(travel_mode: TravelMode) -> Self {
        Self {
            travel_mode,
            selected: None,
            url: None,
        }
    }

    pub fn select(&mut self, place: P) {
        self.selected = Some(place);
        self.refresh_url();
    }

    pub fn set_travel_mode(&mut self, mode: TravelMode) {
        self.travel_mode = mode;
        self.refresh_url();
    }

    fn refresh_url(&mut self) {
        self.url = self
            .selected
            .as_ref()
            .map(|place| place.directions(self.travel_mode));
        if let Some(url) = &self.url {
            debug!(%url, mode = %self.travel_mode, "Updated directions link");
        }
    }
}

/// Complete UI state for the kiosk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub current_view: View,
    pub pathfinder: FinderState<Destination>,
    pub trailheads: FinderState<Trailhead>,
    /// QR code panel on the trailhead view
    pub qr_code_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TravelMode::Walking, TravelMode::Driving)
    }
}

impl AppState {
    /// Fresh state with the given default mode for each view
    #[must_use]
    pub fn new(pathfinder_mode: TravelMode, trailhead_mode: TravelMode) -> Self {
        Self {
            current_view: View::Pathfinder,
            pathfinder: FinderState::new(pathfinder_mode),
            trailheads: FinderState::new(trailhead_mode),
            qr_code_visible: false,
        }
    }

    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    pub fn set_travel_mode(&mut self, view: View, mode: TravelMode) {
        match view {
            View::Pathfinder => self.pathfinder.set_travel_mode(mode),
            View::Trailheads => self.trailheads.set_travel_mode(mode),
        }
    }

    /// Select a destination by name. Unknown names leave the state untouched.
    pub fn select_destination(&mut self, catalog: &Catalog, name: &str) -> Result<()> {
        let destination = catalog
            .find_destination(name)
            .ok_or_else(|| PathfinderError::not_found(format!("destination '{name}'")))?;
        self.pathfinder.select(destination.clone());
        Ok(())
    }

    /// Select a trailhead by name. Unknown names leave the state untouched.
    pub fn select_trailhead(&mut self, catalog: &Catalog, name: &str) -> Result<()> {
        let trailhead = catalog
            .find_trailhead(name)
            .ok_or_else(|| PathfinderError::not_found(format!("trailhead '{name}'")))?;
        self.trailheads.select(trailhead.clone());
        Ok(())
    }

    /// Select by name in whichever list `view` shows
    pub fn select(&mut self, catalog: &Catalog, view: View, name: &str) -> Result<()> {
        match view {
            View::Pathfinder => self.select_destination(catalog, name),
            View::Trailheads => self.select_trailhead(catalog, name),
        }
    }

    pub fn toggle_qr_code(&mut self) {
        self.qr_code_visible = !self.qr_code_visible;
    }

    /// Left moves from the pathfinder to the trailheads, right moves back
    pub fn apply_swipe(&mut self, swipe: Swipe) {
        match (swipe, self.current_view) {
            (Swipe::Left, View::Pathfinder) => self.current_view = View::Trailheads,
            (Swipe::Right, View::Trailheads) => self.current_view = View::Pathfinder,
            _ => {}
        }
    }

    /// Link for the view currently on screen, if something is selected
    #[must_use]
    pub fn current_url(&self) -> Option<&DirectionsLink> {
        match self.current_view {
            View::Pathfinder => self.pathfinder.url.as_ref(),
            View::Trailheads => self.trailheads.url.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Pathfinder);
        assert_eq!(state.pathfinder.travel_mode, TravelMode::Walking);
        assert_eq!(state.trailheads.travel_mode, TravelMode::Driving);
        assert!(state.pathfinder.url.is_none());
        assert!(!state.qr_code_visible);
        assert!(state.current_url().is_none());
    }

    #[test]
    fn test_mode_change_without_selection_has_no_url() {
        let mut state = AppState::default();
        state.set_travel_mode(View::Pathfinder, TravelMode::Transit);
        assert_eq!(state.pathfinder.travel_mode, TravelMode::Transit);
        assert!(state.pathfinder.url.is_none());
    }

    #[test]
    fn test_selection_and_mode_change_refresh_url() {
        let catalog = Catalog::juneau();
        let mut state = AppState::default();

        state
            .select_destination(&catalog, "Mt. Juneau Trailhead")
            .unwrap();
        assert!(state.current_url().unwrap().as_str().ends_with("!3e2"));

        state.set_travel_mode(View::Pathfinder, TravelMode::Transit);
        assert!(state.current_url().unwrap().as_str().ends_with("!3e3"));

        state.select_destination(&catalog, "Cope Park").unwrap();
        assert_eq!(
            state.current_url().unwrap().as_str(),
            "https://www.google.com/maps/dir/?api=1&destination=Cope%20Park%20Rd%2C%20Juneau%2C%20AK%2099801&travelmode=transit"
        );
    }

    #[test]
    fn test_views_keep_independent_state() {
        let catalog = Catalog::juneau();
        let mut state = AppState::default();
        state.select(&catalog, View::Trailheads, "Eaglecrest Ski Area").unwrap();

        assert!(state.pathfinder.selected.is_none());
        assert!(state.current_url().is_none());

        state.set_view(View::Trailheads);
        assert!(
            state
                .current_url()
                .unwrap()
                .as_str()
                .ends_with("&travelmode=driving")
        );
    }

    #[test]
    fn test_unknown_selection_is_not_found_and_keeps_state() {
        let catalog = Catalog::juneau();
        let mut state = AppState::default();
        state.select_destination(&catalog, "Cope Park").unwrap();
        let before = state.clone();

        let err = state.select_destination(&catalog, "Atlantis").unwrap_err();
        assert!(matches!(err, PathfinderError::NotFound { .. }));
        assert_eq!(state, before);

        assert!(state.select_trailhead(&catalog, "Cope Park").is_err());
    }

    #[test]
    fn test_toggle_qr_code() {
        let mut state = AppState::default();
        state.toggle_qr_code();
        assert!(state.qr_code_visible);
        state.toggle_qr_code();
        assert!(!state.qr_code_visible);
    }

    #[rstest]
    #[case(300.0, 200.0, Some(Swipe::Left))]
    #[case(200.0, 300.0, Some(Swipe::Right))]
    #[case(100.0, 50.0, None)]
    #[case(100.0, 150.0, None)]
    #[case(100.0, 100.0, None)]
    fn test_swipe_from_touch(#[case] start: f64, #[case] end: f64, #[case] expected: Option<Swipe>) {
        assert_eq!(Swipe::from_touch(start, end), expected);
    }

    #[rstest]
    #[case(View::Pathfinder, Swipe::Left, View::Trailheads)]
    #[case(View::Pathfinder, Swipe::Right, View::Pathfinder)]
    #[case(View::Trailheads, Swipe::Right, View::Pathfinder)]
    #[case(View::Trailheads, Swipe::Left, View::Trailheads)]
    fn test_apply_swipe(#[case] from: View, #[case] swipe: Swipe, #[case] to: View) {
        let mut state = AppState::default();
        state.set_view(from);
        state.apply_swipe(swipe);
        assert_eq!(state.current_view, to);
    }
}
