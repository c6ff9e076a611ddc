//! Dashboard configuration.
//!
//! Values come from [`Default`] and can be overridden through
//! environment variables with [`DashboardConfig::from_env`].

use std::path::PathBuf;
use std::str::FromStr;

use crate::algorithms::analytics::SliderMark;
use crate::dataset::LaunchDataset;
use crate::types::location::Location;
use crate::types::poi::{PointOfInterest, CAPE_CANAVERAL_POINTS};

/// Path of the launch CSV.
pub const CSV_PATH_VAR: &str = "LAUNCH_GEO_CSV_PATH";
/// Initial map zoom level.
pub const MAP_ZOOM_VAR: &str = "LAUNCH_GEO_MAP_ZOOM";
/// Spacing of the payload slider's tick marks in kilograms.
pub const MARK_INTERVAL_VAR: &str = "LAUNCH_GEO_MARK_INTERVAL_KG";

/// Map center used when no single site is selected.
pub const DEFAULT_MAP_CENTER: Location = Location::new(29.559684, -95.083097);
pub const DEFAULT_MAP_ZOOM: u8 = 10;
pub const DEFAULT_MARK_INTERVAL_KG: u32 = 1000;
pub const DEFAULT_CSV_PATH: &str = "spacex_launch_geo.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub csv_path: PathBuf,
    pub map_zoom: u8,

    /// Distance between labelled slider ticks. The slider's drag step
    /// is a presentation concern and not configured here.
    pub mark_interval_kg: u32,

    pub default_center: Location,

    /// Landmarks annotated around the selected site, in display order.
    pub points_of_interest: Vec<PointOfInterest>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            map_zoom: DEFAULT_MAP_ZOOM,
            mark_interval_kg: DEFAULT_MARK_INTERVAL_KG,
            default_center: DEFAULT_MAP_CENTER,
            points_of_interest: CAPE_CANAVERAL_POINTS.to_vec(),
        }
    }
}

impl DashboardConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    /// Unset variables keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = DashboardConfig::default();
        if let Some(path) = lookup(CSV_PATH_VAR) {
            config.csv_path = PathBuf::from(path);
        }
        if let Some(zoom) = lookup(MAP_ZOOM_VAR) {
            config.map_zoom = parse_var(MAP_ZOOM_VAR, &zoom)?;
        }
        if let Some(interval) = lookup(MARK_INTERVAL_VAR) {
            config.mark_interval_kg = parse_var(MARK_INTERVAL_VAR, &interval)?;
        }
        debug!("config: {:?}", config);
        Ok(config)
    }

    /// Tick marks spanning the payload masses of `dataset`, every
    /// [`mark_interval_kg`](Self::mark_interval_kg) kilograms.
    pub fn payload_marks(&self, dataset: &LaunchDataset) -> Vec<SliderMark> {
        dataset.payload_bounds().slider_marks(self.mark_interval_kg)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid value for {}: {:?}", key, value))
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.map_zoom, 10);
        assert_eq!(config.mark_interval_kg, 1000);
        assert_eq!(config.default_center, Location::new(29.559684, -95.083097));
        assert_eq!(config.points_of_interest.len(), 4);
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (CSV_PATH_VAR, "/data/launches.csv"),
            (MAP_ZOOM_VAR, "7"),
            (MARK_INTERVAL_VAR, " 500 "),
        ]))
        .unwrap();
        assert_eq!(config.csv_path, PathBuf::from("/data/launches.csv"));
        assert_eq!(config.map_zoom, 7);
        assert_eq!(config.mark_interval_kg, 500);
    }

    #[test]
    fn test_payload_marks_follow_interval() {
        let dataset = crate::dataset::sample_dataset();

        let marks = DashboardConfig::default().payload_marks(&dataset);
        let values: Vec<i64> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, (0..=9000).step_by(1000).collect::<Vec<i64>>());

        let config = DashboardConfig {
            mark_interval_kg: 2500,
            ..DashboardConfig::default()
        };
        let values: Vec<i64> = config
            .payload_marks(&dataset)
            .iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(values, vec![0, 2500, 5000, 7500]);
    }

    #[test]
    fn test_invalid_value() {
        let err = DashboardConfig::from_lookup(lookup_from(&[(MAP_ZOOM_VAR, "close")]))
            .unwrap_err();
        assert!(err.contains(MAP_ZOOM_VAR));
    }
}
