use std::fmt::Write;
use std::sync::Arc;

use chrono::{Local, NaiveTime};

use business::domain::favorite::store::FavoritesStore;
use business::domain::rating::errors::RatingError;
use business::domain::rating::model::{Rating, average_score};
use business::domain::rating::use_cases::get_for_restaurant::{
    GetRestaurantRatingsParams, GetRestaurantRatingsUseCase,
};
use business::domain::rating::use_cases::submit::{SubmitRatingParams, SubmitRatingUseCase};
use business::domain::restaurant::model::Restaurant;
use business::domain::restaurant::use_cases::get_by_id::{
    GetRestaurantByIdParams, GetRestaurantByIdUseCase,
};
use business::domain::shared::value_objects::RestaurantId;

use crate::alert::IntoAlert;

pub struct RestaurantScreen {
    get_by_id_use_case: Arc<dyn GetRestaurantByIdUseCase>,
    get_ratings_use_case: Arc<dyn GetRestaurantRatingsUseCase>,
    submit_rating_use_case: Arc<dyn SubmitRatingUseCase>,
    favorites: Arc<FavoritesStore>,
}

impl RestaurantScreen {
    pub fn new(
        get_by_id_use_case: Arc<dyn GetRestaurantByIdUseCase>,
        get_ratings_use_case: Arc<dyn GetRestaurantRatingsUseCase>,
        submit_rating_use_case: Arc<dyn SubmitRatingUseCase>,
        favorites: Arc<FavoritesStore>,
    ) -> Self {
        Self {
            get_by_id_use_case,
            get_ratings_use_case,
            submit_rating_use_case,
            favorites,
        }
    }

    pub async fn show(&self, id: RestaurantId) -> String {
        let (restaurant, ratings) = tokio::join!(
            self.get_by_id_use_case
                .execute(GetRestaurantByIdParams { id }),
            self.get_ratings_use_case
                .execute(GetRestaurantRatingsParams { restaurant_id: id }),
        );

        match restaurant {
            Ok(restaurant) => render(
                &restaurant,
                ratings,
                self.favorites.is_favorite(id),
                Local::now().time(),
            ),
            Err(e) => {
                tracing::warn!("Restaurant {id} unavailable: {e}");
                e.into_alert().to_string()
            }
        }
    }

    /// Removing uses the stored entry, so only adding needs the backend.
    pub async fn toggle_favorite(&self, id: RestaurantId) -> String {
        let stored = self
            .favorites
            .snapshot()
            .entries()
            .iter()
            .find(|favorite| favorite.id == id)
            .cloned();
        if let Some(favorite) = stored {
            let name = favorite.name.clone();
            self.favorites.toggle_favorite(favorite);
            return format!("{} removed from favorites.", name);
        }

        match self
            .get_by_id_use_case
            .execute(GetRestaurantByIdParams { id })
            .await
        {
            Ok(restaurant) => {
                self.favorites.toggle_favorite(restaurant.to_favorite());
                format!("{} added to favorites.", restaurant.name)
            }
            Err(e) => e.into_alert().to_string(),
        }
    }

    pub async fn rate(&self, id: RestaurantId, score: i64, text: String) -> String {
        let params = SubmitRatingParams {
            restaurant_id: id,
            score,
            text,
        };
        match self.submit_rating_use_case.execute(params).await {
            Ok(rating) => {
                let mut out = format!("Thanks for rating {} out of 5!\n", rating.score);
                let refreshed = self
                    .get_ratings_use_case
                    .execute(GetRestaurantRatingsParams { restaurant_id: id })
                    .await;
                match refreshed {
                    Ok(ratings) => out.push_str(&rating_summary(&ratings)),
                    Err(e) => {
                        tracing::warn!("Ratings of restaurant {id} not refreshed: {e}");
                    }
                }
                out
            }
            Err(e) => e.into_alert().to_string(),
        }
    }
}

fn rating_summary(ratings: &[Rating]) -> String {
    match average_score(ratings) {
        Some(average) => format!(
            "Rating: {:.1} / 5 ({} reviews)\n",
            average,
            ratings.len()
        ),
        None => "Rating: no reviews yet\n".to_string(),
    }
}

fn render(
    restaurant: &Restaurant,
    ratings: Result<Vec<Rating>, RatingError>,
    is_favorite: bool,
    now: NaiveTime,
) -> String {
    let mut out = String::new();
    let star = if is_favorite { " ★" } else { "" };
    let _ = writeln!(out, "{}{}", restaurant.name, star);

    if !restaurant.tags.is_empty() {
        let _ = writeln!(out, "Cuisines: {}", restaurant.tags.join(", "));
    }

    let _ = writeln!(
        out,
        "About: {}",
        restaurant
            .description
            .as_deref()
            .unwrap_or("No description available.")
    );

    match restaurant.opening_hours() {
        Some(hours) => {
            let state = match restaurant.is_open_at(now) {
                Some(true) => " (open now)",
                Some(false) => " (closed)",
                None => "",
            };
            let _ = writeln!(out, "Opening times: {}{}", hours, state);
        }
        None => out.push_str("Opening times: unknown\n"),
    }

    match ratings {
        Ok(ratings) => {
            out.push_str(&rating_summary(&ratings));
            for rating in &ratings {
                let _ = writeln!(out, "  {}/5  {}", rating.score, rating.text);
            }
        }
        Err(e) => {
            let _ = writeln!(out, "Ratings unavailable: {}", e.into_alert().message);
        }
    }
    out
}
