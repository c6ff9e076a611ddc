//! Builds the launch map for the current site selection.
//!
//! The map always shows every positioned launch colored by outcome.
//! When a single known site is selected it is centered on that site,
//! which gets its own marker plus the landmark annotations.

use serde::Serialize;

use super::annotator::{annotate, Annotation};
use crate::config::DashboardConfig;
use crate::dataset::LaunchDataset;
use crate::types::launch::LaunchRecord;
use crate::types::location::Location;
use crate::types::poi::MarkerColor;
use crate::types::selection::SiteSelection;

/// Icon shared by launch and site markers.
pub const ROCKET_ICON: &str = "fa-rocket";

/// One launch on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchMarker {
    pub location: Location,
    pub color: MarkerColor,
    pub icon: &'static str,
    pub popup: String,
}

impl LaunchMarker {
    /// Returns [`None`] for records without a position.
    pub fn from_record(record: &LaunchRecord) -> Option<Self> {
        Some(LaunchMarker {
            location: record.location?,
            color: record.outcome.marker_color(),
            icon: ROCKET_ICON,
            popup: format!(
                "Payload: {}<br>Orbit: {}<br>Success: {}",
                record.payload.as_deref().unwrap_or("-"),
                record.orbit.as_deref().unwrap_or("-"),
                record.outcome.class()
            ),
        })
    }
}

/// Marker for the selected launch site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteMarker {
    pub name: String,
    pub location: Location,
    pub color: MarkerColor,
    pub icon: &'static str,
    pub popup: &'static str,
}

/// Everything needed to draw the launch map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Location,
    pub zoom: u8,
    pub markers: Vec<LaunchMarker>,
    pub site_marker: Option<SiteMarker>,
    pub annotations: Vec<Annotation>,
}

impl MapView {
    /// Serializes the view to JSON for the renderer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Builds the map for `selection`.
///
/// Selecting a site that has no known position falls back to the
/// configured default center with no annotations.
pub fn build_map_view(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    config: &DashboardConfig,
) -> MapView {
    info!("Building map for {}", selection);
    let site = match selection {
        SiteSelection::All => None,
        SiteSelection::Site(name) => {
            let site = dataset.site(name);
            if site.is_none() {
                warn!("Unknown launch site {}, using default center", name);
            }
            site
        }
    };

    let markers: Vec<LaunchMarker> = dataset
        .records()
        .iter()
        .filter_map(LaunchMarker::from_record)
        .collect();
    debug!("{} launch markers", markers.len());

    match site {
        Some(site) => MapView {
            center: site.location,
            zoom: config.map_zoom,
            markers,
            site_marker: Some(SiteMarker {
                name: site.name.clone(),
                location: site.location,
                color: MarkerColor::Violet,
                icon: ROCKET_ICON,
                popup: "Launch Site",
            }),
            annotations: annotate(site, &config.points_of_interest),
        },
        None => MapView {
            center: config.default_center,
            zoom: config.map_zoom,
            markers,
            site_marker: None,
            annotations: Vec::new(),
        },
    }
}

#[cfg(test)]
mod map_view_tests {
    use super::*;
    use crate::config::DEFAULT_MAP_CENTER;
    use crate::dataset::sample_dataset;

    #[test]
    fn test_all_sites() {
        let dataset = sample_dataset();
        let view = build_map_view(&dataset, &SiteSelection::All, &DashboardConfig::default());

        assert_eq!(view.center, DEFAULT_MAP_CENTER);
        assert_eq!(view.zoom, 10);
        assert_eq!(view.markers.len(), 8);
        assert!(view.site_marker.is_none());
        assert!(view.annotations.is_empty());

        assert_eq!(view.markers[0].color, MarkerColor::Red);
        assert_eq!(view.markers[3].color, MarkerColor::Green);
        assert_eq!(
            view.markers[3].popup,
            "Payload: SpaceX CRS-10<br>Orbit: LEO (ISS)<br>Success: 1"
        );
    }

    #[test]
    fn test_selected_site() {
        let dataset = sample_dataset();
        let view = build_map_view(
            &dataset,
            &SiteSelection::from("CCAFS SLC-40"),
            &DashboardConfig::default(),
        );

        let slc_40 = Location::new(28.56319718, -80.57682003);
        assert_eq!(view.center, slc_40);
        // launches from every site stay on the map
        assert_eq!(view.markers.len(), 8);

        let site_marker = view.site_marker.as_ref().unwrap();
        assert_eq!(site_marker.name, "CCAFS SLC-40");
        assert_eq!(site_marker.color, MarkerColor::Violet);
        assert_eq!(site_marker.popup, "Launch Site");

        let names: Vec<&str> = view.annotations.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Coastline", "Highway", "City", "Railway"]);
        assert!(view.annotations.iter().all(|a| a.connector.from == slc_40));
    }

    #[test]
    fn test_unknown_site() {
        let dataset = sample_dataset();
        let view = build_map_view(
            &dataset,
            &SiteSelection::from("Boca Chica"),
            &DashboardConfig::default(),
        );
        assert_eq!(view.center, DEFAULT_MAP_CENTER);
        assert!(view.site_marker.is_none());
        assert!(view.annotations.is_empty());
    }

    #[test]
    fn test_configured_points_and_zoom() {
        let dataset = sample_dataset();
        let config = DashboardConfig {
            map_zoom: 7,
            points_of_interest: Vec::new(),
            ..DashboardConfig::default()
        };
        let view = build_map_view(&dataset, &SiteSelection::from("KSC LC-39A"), &config);
        assert_eq!(view.zoom, 7);
        assert!(view.site_marker.is_some());
        assert!(view.annotations.is_empty());
    }

    #[test]
    fn test_to_json() {
        let dataset = sample_dataset();
        let view = build_map_view(
            &dataset,
            &SiteSelection::from("KSC LC-39A"),
            &DashboardConfig::default(),
        );
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();

        assert_eq!(json["zoom"], 10);
        assert_eq!(json["center"]["latitude"], 28.57325457);
        assert_eq!(json["markers"].as_array().unwrap().len(), 8);
        assert_eq!(json["site_marker"]["color"], "violet");
        assert_eq!(json["annotations"][0]["name"], "Coastline");
        assert_eq!(json["annotations"][0]["color"], "cadetblue");
    }
}
