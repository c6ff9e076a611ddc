//! Struct definitions for launch records and launch sites.
//!
//! A [`LaunchRecord`] is one row of the launch dataset. Records are
//! built by the [`dataset`](crate::dataset) loader and are read-only
//! afterwards. A [`LaunchSite`] is a distinct `(name, location)` pair
//! derived from those records.

use chrono::NaiveDate;
use serde::Serialize;

use super::location::{AsLocation, Location};
use super::outcome::Outcome;

/// A single launch event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub flight_number: Option<u32>,

    /// Launch date. Absent when the source value could not be parsed.
    pub date: Option<NaiveDate>,

    pub booster_version: Option<String>,

    /// Coarse booster family, e.g. `v1.1`, `FT`, `B4`, `B5`.
    pub booster_version_category: Option<String>,

    /// Name of the launch site, e.g. `CCAFS LC-40`.
    pub site: String,

    pub payload: Option<String>,
    pub payload_mass_kg: f64,
    pub orbit: Option<String>,
    pub outcome: Outcome,

    /// Position of the launch pad. Some datasets only carry the site
    /// name, in which case this is [`None`].
    pub location: Option<Location>,
}

/// A launch site with a known position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LaunchSite {
    pub name: String,
    pub location: Location,
}

impl AsLocation for LaunchSite {
    fn as_location(&self) -> &Location {
        &self.location
    }
}
