//! Definition of the `Connector` type.
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::location::Location;

/// A connector is a line segment drawn between a launch site and a
/// point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Connector {
    /// The launch site end.
    pub from: Location,

    /// The point of interest end.
    pub to: Location,

    /// Length of the segment in kilometers.
    pub distance_km: OrderedFloat<f64>,
}
