use super::model::{GeoPoint, Restaurant};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points (haversine).
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Sorts nearest first. Restaurants without a location keep their relative
/// order at the end.
pub fn sort_by_distance(restaurants: &mut [Restaurant], origin: GeoPoint) {
    restaurants.sort_by(|a, b| {
        let da = a.location.map(|p| distance_km(origin, p));
        let db = b.location.map(|p| distance_km(origin, p));
        match (da, db) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
}
