use tokio::sync::watch;

use crate::domain::shared::store::Store;
use crate::domain::shared::value_objects::RestaurantId;

use super::model::{FavoriteRestaurant, Favorites};

#[derive(Default)]
pub struct FavoritesStore {
    state: Store<Favorites>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_favorite(&self, restaurant: FavoriteRestaurant) {
        self.state.update(|favorites| favorites.toggle(restaurant));
    }

    pub fn is_favorite(&self, id: RestaurantId) -> bool {
        self.state.read(|favorites| favorites.contains(id))
    }

    pub fn snapshot(&self) -> Favorites {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Favorites> {
        self.state.subscribe()
    }
}
