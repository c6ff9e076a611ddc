//! Annotates a launch site with its distance to nearby landmarks.
//!
//! For every [`PointOfInterest`] the annotator computes the distance
//! from the site, renders a label for the map popup and records a
//! [`Connector`] segment between the two.

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::types::connector::Connector;
use crate::types::location::{AsLocation, Location};
use crate::types::poi::{MarkerColor, PointOfInterest};
use crate::utils::haversine;

/// A labelled point of interest relative to a launch site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// Name of the point of interest.
    pub name: String,

    /// Popup text, e.g. `Highway - 0.59 KM`.
    pub label: String,

    pub location: Location,
    pub color: MarkerColor,
    pub icon: String,

    /// Segment from the site to the point.
    pub connector: Connector,
}

impl Annotation {
    pub fn distance_km(&self) -> f64 {
        self.connector.distance_km.into_inner()
    }
}

/// Formats the popup label for a point at `distance_km` kilometers.
pub fn distance_label(name: &str, distance_km: f64) -> String {
    format!("{} - {:.2} KM", name, distance_km)
}

/// Annotates `points` relative to `site` using the haversine distance.
///
/// # Returns
/// One [`Annotation`] per point, in the order of `points`.
pub fn annotate(site: &dyn AsLocation, points: &[PointOfInterest]) -> Vec<Annotation> {
    annotate_with(site, points, haversine::distance)
}

/// Annotates `points` relative to `site`.
///
/// # Arguments
/// * `site` - The selected launch site.
/// * `points` - Landmarks to annotate, visited once in order.
/// * `distance_function` - Takes the site and a point location and
///   returns the distance in kilometers.
///
/// # Returns
/// One [`Annotation`] per point, in the order of `points`. Nothing is
/// sorted or filtered.
pub fn annotate_with(
    site: &dyn AsLocation,
    points: &[PointOfInterest],
    distance_function: fn(&Location, &Location) -> f64,
) -> Vec<Annotation> {
    let from = *site.as_location();
    points
        .iter()
        .map(|point| {
            let to = *point.as_location();
            let distance_km = distance_function(&from, &to);
            debug!("{} is {:.2} km from {}", point.name, distance_km, from);
            Annotation {
                name: point.name.clone(),
                label: distance_label(&point.name, distance_km),
                location: to,
                color: point.color,
                icon: point.icon.clone(),
                connector: Connector {
                    from,
                    to,
                    distance_km: OrderedFloat(distance_km),
                },
            }
        })
        .collect()
}
