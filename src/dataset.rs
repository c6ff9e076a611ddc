//! Loads launch records from CSV.
//!
//! Two layouts of the launch CSV are in circulation: the geo layout
//! carries `Lat`/`Long` and dates, the dashboard layout only carries the
//! site name, payload mass, class and booster category. Both are read
//! through the same row type; columns that are missing simply come back
//! as [`None`].

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::algorithms::analytics::PayloadRange;
use crate::types::launch::{LaunchRecord, LaunchSite};
use crate::types::location::Location;
use crate::types::outcome::Outcome;

/// Date layouts tried in order. Anything else is treated as missing.
const DATE_FORMATS: [&str; 2] = ["%d-%m-%Y", "%Y-%m-%d"];

/// Errors raised while loading a launch dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not open launch records: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed launch records: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: f64 },

    #[error("row {row}: {column} must be a finite number, got {value}")]
    NonFinite {
        row: usize,
        column: &'static str,
        value: f64,
    },

    #[error("the dataset contains no launch records")]
    Empty,
}

/// One CSV row as written in the file.
#[derive(Debug, Deserialize)]
struct LaunchRow {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Date", default)]
    date: Option<String>,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category", default)]
    booster_version_category: Option<String>,
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload", default)]
    payload: Option<String>,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Orbit", default)]
    orbit: Option<String>,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Lat", default)]
    lat: Option<f64>,
    #[serde(rename = "Long", default)]
    long: Option<f64>,
}

impl LaunchRow {
    /// `row` is the 1-based line number in the file, used for errors.
    fn into_record(self, row: usize) -> Result<LaunchRecord, DatasetError> {
        let outcome = Outcome::try_from(self.class)
            .map_err(|value| DatasetError::InvalidOutcome { row, value })?;
        let payload_mass_kg = finite(row, "Payload Mass (kg)", self.payload_mass_kg)?;

        let date = self.date.as_deref().and_then(parse_launch_date);
        if date.is_none() && self.date.is_some() {
            debug!("row {}: unparseable date {:?}", row, self.date);
        }

        let location = match (self.lat, self.long) {
            (Some(lat), Some(long)) => Some(Location::new(
                finite(row, "Lat", lat)?,
                finite(row, "Long", long)?,
            )),
            _ => None,
        };

        Ok(LaunchRecord {
            flight_number: self.flight_number,
            date,
            booster_version: non_empty(self.booster_version),
            booster_version_category: non_empty(self.booster_version_category),
            site: self.site,
            payload: non_empty(self.payload),
            payload_mass_kg,
            orbit: non_empty(self.orbit),
            outcome,
            location,
        })
    }
}

/// `csv` happily parses `NaN` and `inf`; neither is a usable mass or
/// coordinate.
fn finite(row: usize, column: &'static str, value: f64) -> Result<f64, DatasetError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DatasetError::NonFinite { row, column, value })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses a launch date, returning [`None`] when no known layout fits.
pub fn parse_launch_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value.trim(), format).ok())
}

/// The immutable, in-memory launch table.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<LaunchSite>,
    payload_bounds: PayloadRange,
}

impl LaunchDataset {
    /// Builds a dataset from already parsed records.
    ///
    /// Fails with [`DatasetError::Empty`] when `records` is empty since
    /// payload bounds are undefined in that case.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        let payload_bounds = PayloadRange::spanning(&records).ok_or(DatasetError::Empty)?;

        let mut seen = HashSet::new();
        let sites = records
            .iter()
            .filter_map(|record| {
                let site = LaunchSite {
                    name: record.site.clone(),
                    location: record.location?,
                };
                seen.insert(site.clone()).then_some(site)
            })
            .collect();

        Ok(LaunchDataset {
            records,
            sites,
            payload_bounds,
        })
    }

    /// Reads CSV launch records from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<LaunchRow>().enumerate() {
            // header is line 1
            records.push(row?.into_record(index + 2)?);
        }

        let dataset = Self::from_records(records)?;
        info!(
            "Loaded {} launch records from {} sites",
            dataset.len(),
            dataset.site_names().len()
        );
        Ok(dataset)
    }

    /// Reads CSV launch records from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        info!("Loading launch records from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct `(name, location)` pairs in order of first appearance.
    pub fn sites(&self) -> &[LaunchSite] {
        &self.sites
    }

    /// Distinct site names in order of first appearance, including sites
    /// without a known position.
    pub fn site_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|record| record.site.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// First positioned site carrying `name`.
    pub fn site(&self, name: &str) -> Option<&LaunchSite> {
        self.sites.iter().find(|site| site.name == name)
    }

    /// Smallest and largest payload mass in the dataset.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Small excerpt of the geo layout shared by unit tests.
#[cfg(test)]
pub(crate) const SAMPLE_CSV: &str = "\
Flight Number,Date,Time (UTC),Booster Version,Launch Site,Payload,Payload Mass (kg),Orbit,Customer,Mission Outcome,Landing Outcome,class,Lat,Long,Booster Version Category
1,04-06-2010,18:45:00,F9 v1.0  B0003,CCAFS LC-40,Dragon Spacecraft Qualification Unit,0,LEO,SpaceX,Success,Failure (parachute),0,28.56230197,-80.57735648,v1.0
2,08-12-2010,15:43:00,F9 v1.0  B0004,CCAFS LC-40,Dragon demo flight C1,0,LEO (ISS),NASA (COTS) NRO,Success,Failure (parachute),0,28.56230197,-80.57735648,v1.0
3,29-09-2013,16:00:00,F9 v1.1  B1003,VAFB SLC-4E,CASSIOPE,500,Polar LEO,MDA,Success,Uncontrolled (ocean),0,34.63283416,-120.6107455,v1.1
4,19-02-2017,14:39:00,F9 FT B1031.1,KSC LC-39A,SpaceX CRS-10,2490,LEO (ISS),NASA (CRS),Success,Success (ground pad),1,28.57325457,-80.64689529,FT
5,16-03-2017,06:00:00,F9 FT B1030,KSC LC-39A,EchoStar 23,5600,GTO,EchoStar,Success,No attempt,0,28.57325457,-80.64689529,FT
6,30-03-2017,22:27:00,F9 FT B1021.2,KSC LC-39A,SES-10,5300,GTO,SES,Success,Success (drone ship),1,28.57325457,-80.64689529,FT
7,14-01-2017,17:54:00,F9 FT B1029.1,VAFB SLC-4E,Iridium NEXT 1,9600,Polar LEO,Iridium Communications,Success,Success (drone ship),1,34.63283416,-120.6107455,FT
8,07-01-2018,01:00:00,F9 B4 B1043.1,CCAFS SLC-40,Zuma,5000,LEO,Northrop Grumman,Success,Success (ground pad),1,28.56319718,-80.57682003,B4
";

#[cfg(test)]
pub(crate) fn sample_dataset() -> LaunchDataset {
    LaunchDataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
}
