//! Destination and trailhead tables
//!
//! The built-in tables cover Juneau, Alaska. An alternative table can be
//! loaded from a TOML file with `[[destinations]]` and `[[trailheads]]`
//! arrays.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{Destination, Place, Trailhead};
use crate::{PathfinderError, Result};

/// Immutable lists of places offered by the two finder views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    destinations: Vec<Destination>,
    trailheads: Vec<Trailhead>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::juneau()
    }
}

impl Catalog {
    /// Build a catalog from explicit lists, rejecting empty lists and
    /// duplicate names
    pub fn new(destinations: Vec<Destination>, trailheads: Vec<Trailhead>) -> Result<Self> {
        let catalog = Self {
            destinations,
            trailheads,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Built-in Juneau tables
    #[must_use]
    pub fn juneau() -> Self {
        Self {
            destinations: juneau_destinations(),
            trailheads: juneau_trailheads(),
        }
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(contents)
            .map_err(|e| PathfinderError::validation(format!("Invalid catalog file: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&contents)?;
        info!(
            "Loaded {} destinations and {} trailheads from {}",
            catalog.destinations.len(),
            catalog.trailheads.len(),
            path.display()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    #[must_use]
    pub fn trailheads(&self) -> &[Trailhead] {
        &self.trailheads
    }

    /// Exact-name lookup
    #[must_use]
    pub fn find_destination(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == name)
    }

    /// Exact-name lookup
    #[must_use]
    pub fn find_trailhead(&self, name: &str) -> Option<&Trailhead> {
        self.trailheads.iter().find(|t| t.name == name)
    }

    fn validate(&self) -> Result<()> {
        ensure_listed("destinations", &self.destinations)?;
        ensure_listed("trailheads", &self.trailheads)?;
        Ok(())
    }
}

fn ensure_listed<P: Place>(list: &str, places: &[P]) -> Result<()> {
    if places.is_empty() {
        return Err(PathfinderError::validation(format!(
            "Catalog must contain at least one entry in {list}"
        )));
    }

    let mut seen = HashSet::new();
    for place in places {
        if !seen.insert(place.name()) {
            return Err(PathfinderError::validation(format!(
                "Duplicate name '{}' in {list}",
                place.name()
            )));
        }
    }
    Ok(())
}

fn juneau_destinations() -> Vec<Destination> {
    [
        ("Alaska State Capitol", "120 4th St, Juneau, AK 99801"),
        ("Costco Wholesale", "5225 Commercial Blvd, Juneau, AK 99801"),
        ("Deckhand Daves", "139 S Franklin St, Juneau, AK 99801"),
        ("Docks, Main - AS, CT, FKL", "470 S Franklin St, Juneau, AK 99801"),
        ("Docks, South - AJ", "1110 Jacobsen Dr, Juneau, AK 99801"),
        ("Cope Park", "Cope Park Rd, Juneau, AK 99801"),
        ("Gold Creek Flume East Trailhead", "58.307327, -134.402282"),
        ("Gold Creek Flume West Trailhead", "58.306550, -134.419670"),
        ("Jensen-Olson Arboretum", "23035 Glacier Hwy, Juneau, AK 99801"),
        ("Mt. Juneau Trailhead", "58.308126, -134.386518"),
        ("Mt. Roberts Trailhead, Basin Rd", "58.306894, -134.404710"),
        ("National Shrine of St. Thérèse", "21425 Glacier Hwy, Juneau, AK 99801"),
        ("Nugget Falls", "Nugget Falls Trail, Juneau, AK 99801"),
        ("Perseverance Trailhead", "58.308126, -134.386518"),
        ("Sandpiper Cafe", "Sandpiper Cafe, Juneau, AK"),
        ("Tracy’s King Crab Shack - Main", "432 S Franklin St, Juneau, AK 99801"),
        ("Tracy's King Crab Shack 2", "300 Whittier St, Juneau, AK 99801"),
        ("Mendenhall Glacier Visitor Center", "6000 Glacier Spur Rd, Juneau, AK 99801"),
        ("Whale Project", "Harris Harbor Way, Juneau, AK 99801"),
    ]
    .into_iter()
    .map(|(name, query)| Destination::new(name, query))
    .collect()
}

fn juneau_trailheads() -> Vec<Trailhead> {
    const ALLTRAILS: &str = "https://www.alltrails.com/trail/us/alaska";

    [
        (
            "Mt. Juneau (Yadaa Kalé) Trailhead",
            "Perseverance Trail, Juneau, AK 99801",
            "MM 3.5",
            "Park at the Perseverance Trail parking area",
            "mt-juneau-yadaa-kale-trailhead",
        ),
        (
            "Perseverance Trailhead",
            "Perseverance Trail, Juneau, AK 99801",
            "MM 3.5",
            "Main trailhead for Perseverance Trail",
            "perseverance-trailhead",
        ),
        (
            "Gold Creek Flume East Trailhead",
            "921 Basin Rd, Juneau, AK 99801",
            "MM 2.8",
            "Access via Basin Road, look for the flume",
            "gold-creek-flume-east-trailhead",
        ),
        (
            "Gold Creek Flume West Trailhead",
            "1684 Evergreen Ave, Juneau, AK 99801",
            "MM 2.1",
            "Western access point to the flume trail",
            "gold-creek-flume-west-trailhead",
        ),
        (
            "Mount Roberts Trailhead",
            "1001 Basin Rd, Juneau, AK 99801",
            "MM 2.9",
            "Trailhead near the Basin Road junction",
            "mount-roberts-trailhead-basin-rd",
        ),
        (
            "Eaglecrest Ski Area",
            "3000 Fish Creek Rd, Juneau, AK 99801",
            "MM 15.2",
            "Summer hiking trails available",
            "eaglecrest-ski-area",
        ),
        (
            "West Glacier Trail",
            "West Glacier Trail, Juneau, AK 99801",
            "MM 12.8",
            "Access to Mendenhall Glacier from the west",
            "west-glacier-trail",
        ),
        (
            "East Glacier Trail",
            "East Glacier Trail, Juneau, AK 99801",
            "MM 13.1",
            "Alternative route to Mendenhall Glacier",
            "east-glacier-trail",
        ),
        (
            "Herbert Glacier Trail",
            "Herbert Glacier Trail, Juneau, AK 99801",
            "MM 28.3",
            "Remote glacier access, 4WD recommended",
            "herbert-glacier-trail",
        ),
        (
            "Treadwell Ditch Trail",
            "Treadwell Ditch Trail, Juneau, AK 99801",
            "MM 4.2",
            "Historic mining trail with great views",
            "treadwell-ditch-trail",
        ),
    ]
    .into_iter()
    .map(|(name, query, milemarker, notes, slug)| {
        Trailhead::new(name, query)
            .with_milemarker(milemarker)
            .with_notes(notes)
            .with_source(format!("{ALLTRAILS}/{slug}"))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location_query::{QueryKind, classify};
    use std::io::Write;

    #[test]
    fn test_juneau_tables_are_complete() {
        let catalog = Catalog::juneau();
        assert_eq!(catalog.destinations().len(), 19);
        assert_eq!(catalog.trailheads().len(), 10);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_coordinate_destinations_are_near_juneau() {
        let catalog = Catalog::juneau();
        let mut coordinate_entries = 0;
        for dest in catalog.destinations() {
            if let crate::LocationQuery::Coordinates {
                latitude,
                longitude,
            } = classify(&dest.query)
            {
                coordinate_entries += 1;
                assert!((58.0..59.0).contains(&latitude), "{}", dest.name);
                assert!((-135.0..-134.0).contains(&longitude), "{}", dest.name);
            }
        }
        assert_eq!(coordinate_entries, 5);
    }

    #[test]
    fn test_trailheads_have_sources() {
        for trailhead in Catalog::juneau().trailheads() {
            let source = trailhead.source.as_deref().unwrap();
            assert!(source.starts_with("https://"));
            assert!(trailhead.milemarker.as_deref().unwrap().starts_with("MM "));
            assert_eq!(classify(&trailhead.query).kind(), QueryKind::FreeText);
        }
    }

    #[test]
    fn test_find_by_exact_name() {
        let catalog = Catalog::juneau();
        assert_eq!(
            catalog.find_destination("Cope Park").unwrap().query,
            "Cope Park Rd, Juneau, AK 99801"
        );
        assert!(catalog.find_destination("cope park").is_none());
        assert_eq!(
            catalog.find_trailhead("Eaglecrest Ski Area").unwrap().milemarker.as_deref(),
            Some("MM 15.2")
        );
        assert!(catalog.find_trailhead("Amalga").is_none());
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[destinations]]
            name = "Dock"
            query = "G5HV+96 Dobson Landing, Juneau, AK"

            [[trailheads]]
            name = "Amalga"
            query = "58.7254, -134.8157"
            milemarker = "27.2"
            notes = "Parking along Eagle River"
            "#,
        )
        .unwrap();
        assert_eq!(catalog.destinations().len(), 1);
        assert_eq!(catalog.trailheads()[0].notes.as_deref(), Some("Parking along Eagle River"));
        assert!(catalog.trailheads()[0].source.is_none());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = Catalog::new(
            vec![Destination::new("A", "x"), Destination::new("A", "y")],
            vec![Trailhead::new("T", "z")],
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate name 'A'"));
    }

    #[test]
    fn test_rejects_empty_lists() {
        let err = Catalog::new(vec![Destination::new("A", "x")], Vec::new()).unwrap_err();
        assert!(matches!(err, PathfinderError::Validation { .. }));

        assert!(Catalog::from_toml_str("destinations = []\ntrailheads = []").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[destinations]]\nname = \"Capitol\"\nquery = \"120 4th St, Juneau, AK 99801\"\n\n[[trailheads]]\nname = \"Flume\"\nquery = \"921 Basin Rd, Juneau, AK 99801\""
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.find_destination("Capitol").is_some());
        assert!(catalog.find_trailhead("Flume").is_some());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load("/nonexistent/catalog.toml").unwrap_err();
        assert!(matches!(err, PathfinderError::Io { .. }));
    }
}
