use chrono::NaiveTime;

use crate::domain::favorite::model::FavoriteRestaurant;
use crate::domain::shared::value_objects::RestaurantId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub opening_time: Option<NaiveTime>,
    pub closing_time: Option<NaiveTime>,
    pub location: Option<GeoPoint>,
    pub tags: Vec<String>,
}

impl Restaurant {
    pub fn new(id: RestaurantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            opening_time: None,
            closing_time: None,
            location: None,
            tags: Vec::new(),
        }
    }

    /// Formatted as "08:00 - 16:00" when both times are known.
    pub fn opening_hours(&self) -> Option<String> {
        let opening = self.opening_time?;
        let closing = self.closing_time?;
        Some(format!(
            "{} - {}",
            opening.format("%H:%M"),
            closing.format("%H:%M")
        ))
    }

    /// Returns `None` when opening hours are unknown. Hours that close before
    /// they open wrap past midnight; equal times mean open around the clock.
    pub fn is_open_at(&self, time: NaiveTime) -> Option<bool> {
        let opening = self.opening_time?;
        let closing = self.closing_time?;

        if opening == closing {
            Some(true)
        } else if opening < closing {
            Some(time >= opening && time < closing)
        } else {
            Some(time >= opening || time < closing)
        }
    }

    pub fn to_favorite(&self) -> FavoriteRestaurant {
        FavoriteRestaurant::new(self.id, self.name.clone()).with_tags(self.tags.iter().cloned())
    }
}

/// Parses backend clock times such as "08:00" or "08:00:00".
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Keeps only the restaurant behind the selected map marker, or everything
/// when no marker is selected.
pub fn filter_by_marker(
    restaurants: Vec<Restaurant>,
    selected: Option<RestaurantId>,
) -> Vec<Restaurant> {
    match selected {
        Some(id) => restaurants.into_iter().filter(|r| r.id == id).collect(),
        None => restaurants,
    }
}
