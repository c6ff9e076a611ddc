//! Points of interest drawn around a launch site.
//!
//! A [`PointOfInterest`] is a named landmark (coastline, highway, city,
//! railway...) whose distance to the selected launch site is shown on the
//! map. The lists are static: defined once and never mutated.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::location::{AsLocation, Location};

/// Colors available for map markers and icons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Blue,
    CadetBlue,
    Green,
    Purple,
    Red,
    Violet,
}

/// A named landmark with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointOfInterest {
    pub name: String,
    pub location: Location,
    pub color: MarkerColor,

    /// Font Awesome icon name, e.g. `fa-road`.
    pub icon: String,
}

impl PointOfInterest {
    pub fn new(name: &str, location: Location, color: MarkerColor, icon: &str) -> Self {
        PointOfInterest {
            name: name.to_string(),
            location,
            color,
            icon: icon.to_string(),
        }
    }
}

impl AsLocation for PointOfInterest {
    fn as_location(&self) -> &Location {
        &self.location
    }
}

/// Landmarks around Cape Canaveral, in display order.
pub static CAPE_CANAVERAL_POINTS: Lazy<Vec<PointOfInterest>> = Lazy::new(|| {
    vec![
        PointOfInterest::new(
            "Coastline",
            Location::new(28.56367, -80.56772),
            MarkerColor::CadetBlue,
            "fa-water",
        ),
        PointOfInterest::new(
            "Highway",
            Location::new(28.56357, -80.57081),
            MarkerColor::Blue,
            "fa-road",
        ),
        PointOfInterest::new(
            "City",
            Location::new(28.07923, -80.6051),
            MarkerColor::Red,
            "fa-building",
        ),
        PointOfInterest::new(
            "Railway",
            Location::new(28.57221, -80.58528),
            MarkerColor::Purple,
            "fa-train",
        ),
    ]
});

#[cfg(test)]
mod poi_tests {
    use super::*;

    #[test]
    fn test_cape_canaveral_order() {
        let names: Vec<&str> = CAPE_CANAVERAL_POINTS
            .iter()
            .map(|point| point.name.as_str())
            .collect();
        assert_eq!(names, vec!["Coastline", "Highway", "City", "Railway"]);
        assert_eq!(CAPE_CANAVERAL_POINTS[1].icon, "fa-road");
        assert_eq!(
            CAPE_CANAVERAL_POINTS[2].as_location(),
            &Location::new(28.07923, -80.6051)
        );
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&MarkerColor::CadetBlue).unwrap();
        assert_eq!(json, "\"cadetblue\"");
    }
}
