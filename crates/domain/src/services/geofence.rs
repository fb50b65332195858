//! Geofence matching.
//!
//! A point is inside a place's geofence when its great-circle distance to
//! the place center is at most the geofence radius.

use crate::models::place::Place;

/// Mean Earth radius in meters used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Place label reported when no geofence encloses a point.
pub const UNKNOWN_PLACE: &str = "unknown";

/// Haversine distance between two points, in meters. Inputs are degrees.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_METERS * c
}

/// Returns the first place, in iteration order, whose geofence encloses the point.
///
/// Overlapping geofences are not disambiguated by distance: the earlier place wins.
pub fn find_enclosing_place<'a, I>(lat: f64, lon: f64, places: I) -> Option<&'a Place>
where
    I: IntoIterator<Item = &'a Place>,
{
    places
        .into_iter()
        .find(|place| distance_meters(lat, lon, place.lat, place.lon) <= f64::from(place.geofence_radius))
}

/// Name of the first enclosing place, or [`UNKNOWN_PLACE`].
pub fn resolve_place<'a>(lat: f64, lon: f64, places: &'a [Place]) -> &'a str {
    find_enclosing_place(lat, lon, places)
        .map(|place| place.name.as_str())
        .unwrap_or(UNKNOWN_PLACE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, lat: f64, lon: f64, radius: i32) -> Place {
        Place {
            id: name.to_string(),
            name: name.to_string(),
            lat,
            lon,
            geofence_radius: radius,
            place_type: "custom".to_string(),
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance_meters(12.9716, 77.5946, 12.9716, 77.5946), 0.0);
        assert_eq!(distance_meters(-33.86, 151.21, -33.86, 151.21), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let ab = distance_meters(51.5074, -0.1278, 48.8566, 2.3522);
        let ba = distance_meters(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn test_distance_known_values() {
        // One degree of longitude on the equator.
        let one_degree = distance_meters(0.0, 0.0, 0.0, 1.0);
        assert!((one_degree - 111_194.9).abs() < 1.0);

        // London to Paris, roughly 343.5 km.
        let london_paris = distance_meters(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((london_paris - 343_500.0).abs() < 1_000.0);
    }

    #[test]
    fn test_point_inside_geofence_resolves() {
        let places = vec![place("Office", 0.0, 0.0, 1000)];
        assert!((distance_meters(0.0, 0.008, 0.0, 0.0) - 889.6).abs() < 1.0);
        assert_eq!(resolve_place(0.0, 0.008, &places), "Office");
    }

    #[test]
    fn test_point_outside_geofence_is_unknown() {
        let places = vec![place("Office", 0.0, 0.0, 1000)];
        assert!((distance_meters(0.0, 0.02, 0.0, 0.0) - 2223.9).abs() < 1.0);
        assert_eq!(resolve_place(0.0, 0.02, &places), UNKNOWN_PLACE);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let places = vec![place("Pin", 10.0, 10.0, 0)];
        assert_eq!(resolve_place(10.0, 10.0, &places), "Pin");
    }

    #[test]
    fn test_empty_collection_is_unknown() {
        assert_eq!(resolve_place(1.0, 1.0, &[]), UNKNOWN_PLACE);
        assert!(find_enclosing_place(1.0, 1.0, &[]).is_none());
    }

    #[test]
    fn test_first_match_wins_over_nearest() {
        // The point sits ~111 m from "Campus" and exactly on "Desk", but
        // "Campus" comes first.
        let places = vec![
            place("Campus", 0.0, 0.001, 5000),
            place("Desk", 0.0, 0.0, 50),
        ];
        assert_eq!(resolve_place(0.0, 0.0, &places), "Campus");

        let reversed: Vec<Place> = places.into_iter().rev().collect();
        assert_eq!(resolve_place(0.0, 0.0, &reversed), "Desk");
    }

    #[test]
    fn test_find_enclosing_place_returns_place() {
        let places = vec![place("Far", 40.0, 40.0, 10), place("Near", 1.0, 1.0, 100)];
        let found = find_enclosing_place(1.0, 1.0005, &places).unwrap();
        assert_eq!(found.id, "Near");
    }
}
