//! Struct definitions and implementations for [`Location`].
//!
//! Anything that sits somewhere on the map (a launch site, a point of
//! interest) exposes its position through the [`AsLocation`] trait so
//! that distance helpers can stay agnostic of the concrete type.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] is a geographic coordinate in decimal degrees.
///
/// No datum correction is performed and the ranges are not validated:
/// latitude is expected in [-90, 90] and longitude in [-180, 180].
/// Values outside those ranges still produce numbers, just not
/// meaningful ones.
///
/// [`OrderedFloat`] is used so that a location can be hashed and used
/// as a map key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Builds a location from plain latitude and longitude degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.latitude.into_inner()
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.longitude.into_inner()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat(), self.lon())
    }
}

/// Since Rust doesn't allow for inheritance, "located" objects share a
/// trait instead so functions can accept any of them.
pub trait AsLocation {
    /// Returns the position of the object.
    fn as_location(&self) -> &Location;
}

impl AsLocation for Location {
    fn as_location(&self) -> &Location {
        self
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_and_accessors() {
        let location = Location::new(28.56341, -80.57679);
        assert_eq!(location.lat(), 28.56341);
        assert_eq!(location.lon(), -80.57679);
        assert_eq!(location.as_location(), &location);
    }

    #[test]
    fn test_hashable() {
        let mut seen = HashSet::new();
        seen.insert(Location::new(28.57325457, -80.64689529));
        seen.insert(Location::new(28.57325457, -80.64689529));
        seen.insert(Location::new(34.63283416, -120.6107455));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_display() {
        let location = Location::new(29.559684, -95.083097);
        assert_eq!(location.to_string(), "(29.559684, -95.083097)");
    }
}
