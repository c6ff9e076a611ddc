//! Great-circle distance between two [`Location`]s.

use crate::types::location::Location;

/// Mean earth radius in kilometers used by [`distance`].
pub const EARTH_RADIUS_KM: f64 = 6373.0;

/// Computes the haversine distance between two locations.
///
/// # Arguments
/// * `from` - One end of the arc.
/// * `to` - The other end of the arc.
///
/// # Returns
/// The distance in kilometers. Identical points return `0.0` and
/// antipodal points return `EARTH_RADIUS_KM * PI`. Inputs are not
/// validated, so the function never fails.
pub fn distance(from: &Location, to: &Location) -> f64 {
    let lat1 = from.lat().to_radians();
    let lon1 = from.lon().to_radians();
    let lat2 = to.lat().to_radians();
    let lon2 = to.lon().to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
