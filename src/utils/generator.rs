//! Generates random locations around a center point.

use rand::Rng;

use crate::types::location::Location;
use crate::utils::haversine::EARTH_RADIUS_KM;

/// Generates `capacity` random locations within `radius_km` of
/// `location`.
///
/// Points are spread uniformly over the disc: the distance from the
/// center is drawn as `radius * sqrt(u)` and the bearing uniformly, then
/// projected with the spherical destination formula.
///
/// # Arguments
/// * `location` - The center of the disc.
/// * `radius_km` - Maximum great-circle distance from the center.
/// * `capacity` - Number of locations to generate.
pub fn generate_locations_near(
    location: &Location,
    radius_km: f64,
    capacity: usize,
) -> Vec<Location> {
    let mut rng = rand::thread_rng();
    let lat1 = location.lat().to_radians();
    let lon1 = location.lon().to_radians();

    (0..capacity)
        .map(|_| {
            let angular = radius_km * rng.gen::<f64>().sqrt() / EARTH_RADIUS_KM;
            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);

            let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos())
                .asin();
            let lon2 = lon1
                + (bearing.sin() * angular.sin() * lat1.cos())
                    .atan2(angular.cos() - lat1.sin() * lat2.sin());

            // wrap into [-180, 180)
            let lon2 = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
            Location::new(lat2.to_degrees(), lon2)
        })
        .collect()
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::utils::haversine;

    #[test]
    fn test_capacity() {
        let center = Location::new(28.5721, -80.648);
        assert_eq!(generate_locations_near(&center, 10.0, 0).len(), 0);
        assert_eq!(generate_locations_near(&center, 10.0, 250).len(), 250);
    }

    #[test]
    fn test_within_radius() {
        let center = Location::new(34.632834, -120.610745);
        for location in generate_locations_near(&center, 25.0, 200) {
            // small slack for rounding in the projection
            assert!(haversine::distance(&center, &location) <= 25.0 + 1e-6);
            assert!((-90.0..=90.0).contains(&location.lat()));
            assert!((-180.0..=180.0).contains(&location.lon()));
        }
    }
}
