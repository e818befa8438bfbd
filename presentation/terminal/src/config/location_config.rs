use std::env;

use business::domain::restaurant::model::GeoPoint;

const DEFAULT_LATITUDE: f64 = 55.785821;
const DEFAULT_LONGITUDE: f64 = 12.521153;

/// Reference point used to order restaurants by distance.
#[derive(Debug, Clone, Copy)]
pub struct LocationConfig {
    pub origin: GeoPoint,
}

impl LocationConfig {
    /// Environment variables:
    /// - DEFAULT_LATITUDE (default: 55.785821)
    /// - DEFAULT_LONGITUDE (default: 12.521153)
    pub fn from_env() -> Self {
        let latitude = parse_coordinate(env::var("DEFAULT_LATITUDE").ok(), 90.0)
            .unwrap_or(DEFAULT_LATITUDE);
        let longitude = parse_coordinate(env::var("DEFAULT_LONGITUDE").ok(), 180.0)
            .unwrap_or(DEFAULT_LONGITUDE);

        Self {
            origin: GeoPoint::new(latitude, longitude),
        }
    }
}

fn parse_coordinate(value: Option<String>, limit: f64) -> Option<f64> {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|coordinate| coordinate.is_finite() && coordinate.abs() <= limit)
}
