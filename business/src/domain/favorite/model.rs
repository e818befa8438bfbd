use std::collections::BTreeSet;

use crate::domain::shared::value_objects::RestaurantId;

#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteRestaurant {
    pub id: RestaurantId,
    pub name: String,
    pub tags: BTreeSet<String>,
}

impl FavoriteRestaurant {
    pub fn new(id: RestaurantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Favorites in the order they were marked, at most one entry per id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    entries: Vec<FavoriteRestaurant>,
}

impl Favorites {
    pub fn entries(&self) -> &[FavoriteRestaurant] {
        &self.entries
    }

    pub fn contains(&self, id: RestaurantId) -> bool {
        self.entries.iter().any(|fav| fav.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Removes the restaurant when present, appends it otherwise.
    pub fn toggle(&mut self, restaurant: FavoriteRestaurant) -> bool {
        if self.contains(restaurant.id) {
            self.entries.retain(|fav| fav.id != restaurant.id);
        } else {
            self.entries.push(restaurant);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_add_then_remove_on_double_toggle() {
        let mut favorites = Favorites::default();

        favorites.toggle(FavoriteRestaurant::new(RestaurantId::new(5), "X"));
        assert_eq!(favorites.entries(), &[FavoriteRestaurant::new(RestaurantId::new(5), "X")]);

        favorites.toggle(FavoriteRestaurant::new(RestaurantId::new(5), "X"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn should_match_by_id_only() {
        let mut favorites = Favorites::default();
        favorites.toggle(FavoriteRestaurant::new(RestaurantId::new(1), "Cafe"));

        favorites.toggle(FavoriteRestaurant::new(RestaurantId::new(1), "Renamed Cafe"));

        assert!(!favorites.contains(RestaurantId::new(1)));
    }

    #[test]
    fn should_keep_tags_of_favorite() {
        let favorite =
            FavoriteRestaurant::new(RestaurantId::new(2), "Green").with_tags(["Vegan", "Organic"]);

        assert!(favorite.tags.contains("Vegan"));
        assert_eq!(favorite.tags.len(), 2);
    }
}
