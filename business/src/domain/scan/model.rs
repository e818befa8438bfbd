use url::Url;

use crate::domain::shared::value_objects::RestaurantId;

use super::errors::ScanError;

/// Where a scanned QR code leads.
#[derive(Debug, Clone, PartialEq)]
pub enum ScannedLink {
    /// Deep link into the app, e.g. `myapp://restaurant-info?id=3`.
    Restaurant(RestaurantId),
    /// Any web page; handed to the system browser.
    External(Url),
}

impl ScannedLink {
    pub fn parse(data: &str, app_scheme: &str) -> Result<Self, ScanError> {
        let url = Url::parse(data.trim()).map_err(|_| ScanError::InvalidLink)?;

        if url.scheme().eq_ignore_ascii_case(app_scheme) {
            return restaurant_id(&url)
                .map(ScannedLink::Restaurant)
                .ok_or(ScanError::InvalidLink);
        }

        match url.scheme() {
            "http" | "https" => Ok(ScannedLink::External(url)),
            _ => Err(ScanError::UnsupportedScheme),
        }
    }
}

fn restaurant_id(url: &Url) -> Option<RestaurantId> {
    url.query_pairs()
        .find(|(key, _)| key == "id")
        .and_then(|(_, value)| value.parse::<i64>().ok())
        .map(RestaurantId::new)
}
