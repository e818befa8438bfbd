use std::fmt::Write;
use std::sync::Arc;

use business::domain::favorite::store::FavoritesStore;
use business::domain::menu::use_cases::get_all_tags::GetAllTagsUseCase;
use business::domain::tag_preference::store::TagPreferenceStore;

use crate::alert::IntoAlert;

/// Favorites and tag preferences of the current session.
pub struct AccountScreen {
    get_all_tags_use_case: Arc<dyn GetAllTagsUseCase>,
    favorites: Arc<FavoritesStore>,
    tags: Arc<TagPreferenceStore>,
}

impl AccountScreen {
    pub fn new(
        get_all_tags_use_case: Arc<dyn GetAllTagsUseCase>,
        favorites: Arc<FavoritesStore>,
        tags: Arc<TagPreferenceStore>,
    ) -> Self {
        Self {
            get_all_tags_use_case,
            favorites,
            tags,
        }
    }

    pub fn show(&self) -> String {
        let mut out = String::from("Favorite Restaurants\n");
        let favorites = self.favorites.snapshot();
        if favorites.is_empty() {
            out.push_str("  No favorites yet.\n");
        }
        for favorite in favorites.entries() {
            let _ = writeln!(out, "  [{}] {}", favorite.id, favorite.name);
        }

        let preferences = self.tags.snapshot();
        if preferences.is_empty() {
            out.push_str("Preferred tags: none\n");
        } else {
            let selected: Vec<&str> = preferences.iter().collect();
            let _ = writeln!(out, "Preferred tags: {}", selected.join(", "));
        }
        out
    }

    pub fn toggle_tag(&self, tag: &str) -> String {
        self.tags.toggle_tag(tag);
        if self.tags.is_selected(tag) {
            format!("Highlighting {}.", tag)
        } else {
            format!("No longer highlighting {}.", tag)
        }
    }

    pub async fn list_tags(&self) -> String {
        match self.get_all_tags_use_case.execute().await {
            Ok(tags) => {
                let mut out = String::from("Tags\n");
                for tag in tags {
                    let mark = if self.tags.is_selected(&tag.name) {
                        "x"
                    } else {
                        " "
                    };
                    let _ = writeln!(out, "  [{}] {}", mark, tag.name);
                }
                out
            }
            Err(e) => e.into_alert().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::favorite::model::FavoriteRestaurant;
    use business::domain::menu::errors::MenuError;
    use business::domain::menu::model::Tag;
    use business::domain::shared::value_objects::RestaurantId;
    use mockall::mock;

    mock! {
        pub GetTags {}

        #[async_trait]
        impl GetAllTagsUseCase for GetTags {
            async fn execute(&self) -> Result<Vec<Tag>, MenuError>;
        }
    }

    fn screen(use_case: MockGetTags) -> AccountScreen {
        AccountScreen::new(
            Arc::new(use_case),
            Arc::new(FavoritesStore::new()),
            Arc::new(TagPreferenceStore::new()),
        )
    }

    #[test]
    fn should_show_empty_account() {
        let screen = screen(MockGetTags::new());

        assert_eq!(
            screen.show(),
            "Favorite Restaurants\n  No favorites yet.\nPreferred tags: none\n"
        );
    }

    #[test]
    fn should_list_favorites_and_preferences() {
        let screen = screen(MockGetTags::new());
        screen
            .favorites
            .toggle_favorite(FavoriteRestaurant::new(RestaurantId::new(3), "Kaffestuen"));
        screen.toggle_tag("Vegan");

        let output = screen.show();

        assert!(output.contains("  [3] Kaffestuen\n"));
        assert!(output.contains("Preferred tags: Vegan\n"));
    }

    #[test]
    fn should_toggle_tag_on_and_off() {
        let screen = screen(MockGetTags::new());

        assert_eq!(screen.toggle_tag("Spicy"), "Highlighting Spicy.");
        assert_eq!(screen.toggle_tag("Spicy"), "No longer highlighting Spicy.");
    }

    #[tokio::test]
    async fn should_mark_selected_tags_in_catalogue() {
        let mut use_case = MockGetTags::new();
        use_case.expect_execute().returning(|| {
            Ok(vec![
                Tag {
                    id: 1,
                    name: "Spicy".to_string(),
                },
                Tag {
                    id: 2,
                    name: "Vegan".to_string(),
                },
            ])
        });
        let screen = screen(use_case);
        screen.toggle_tag("Vegan");

        let output = screen.list_tags().await;

        assert_eq!(output, "Tags\n  [ ] Spicy\n  [x] Vegan\n");
    }
}
