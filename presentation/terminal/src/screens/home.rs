use std::fmt::Write;
use std::sync::Arc;

use business::domain::favorite::store::FavoritesStore;
use business::domain::marker::store::MarkerSelectionStore;
use business::domain::restaurant::geo::distance_km;
use business::domain::restaurant::model::{GeoPoint, Restaurant, filter_by_marker};
use business::domain::restaurant::use_cases::get_all::{
    GetAllRestaurantsParams, GetAllRestaurantsUseCase,
};
use business::domain::shared::value_objects::RestaurantId;
use business::domain::tag_preference::store::TagPreferenceStore;

use crate::alert::IntoAlert;
use crate::screens::format::highlight_marker;

/// Restaurant list with favorites, tag highlighting and marker filter.
pub struct HomeScreen {
    get_all_use_case: Arc<dyn GetAllRestaurantsUseCase>,
    favorites: Arc<FavoritesStore>,
    tags: Arc<TagPreferenceStore>,
    marker: Arc<MarkerSelectionStore>,
    origin: GeoPoint,
}

impl HomeScreen {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllRestaurantsUseCase>,
        favorites: Arc<FavoritesStore>,
        tags: Arc<TagPreferenceStore>,
        marker: Arc<MarkerSelectionStore>,
        origin: GeoPoint,
    ) -> Self {
        Self {
            get_all_use_case,
            favorites,
            tags,
            marker,
            origin,
        }
    }

    pub async fn show(&self) -> String {
        let params = GetAllRestaurantsParams {
            near: Some(self.origin),
        };
        match self.get_all_use_case.execute(params).await {
            Ok(restaurants) => {
                let visible = filter_by_marker(restaurants, self.marker.selected());
                self.render(&visible)
            }
            Err(e) => {
                tracing::warn!("Restaurant list unavailable: {e}");
                e.into_alert().to_string()
            }
        }
    }

    pub async fn select(&self, id: RestaurantId) -> String {
        self.marker.select(id);
        self.show().await
    }

    pub async fn unselect(&self) -> String {
        self.marker.clear();
        self.show().await
    }

    fn render(&self, restaurants: &[Restaurant]) -> String {
        let mut out = String::from("Restaurants\n");
        if restaurants.is_empty() {
            out.push_str("  No restaurants to show.\n");
            return out;
        }

        for restaurant in restaurants {
            let highlight = self.tags.highlight_for(restaurant.tags.as_slice());
            let star = if self.favorites.is_favorite(restaurant.id) {
                "★"
            } else {
                " "
            };
            let _ = write!(
                out,
                "{}{} [{}] {}",
                highlight_marker(highlight),
                star,
                restaurant.id,
                restaurant.name
            );
            if let Some(location) = restaurant.location {
                let _ = write!(out, "  {:.1} km", distance_km(self.origin, location));
            }
            if let Some(hours) = restaurant.opening_hours() {
                let _ = write!(out, "  {}", hours);
            }
            out.push('\n');
        }

        if let Some(id) = self.marker.selected() {
            let _ = writeln!(out, "Marker {} selected, `unselect` shows all.", id);
        }
        out
    }
}
