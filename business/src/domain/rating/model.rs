use crate::domain::shared::value_objects::RestaurantId;

use super::errors::RatingError;

pub const MIN_SCORE: i64 = 1;
pub const MAX_SCORE: i64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: i64,
    pub restaurant_id: RestaurantId,
    pub score: u8,
    pub text: String,
}

/// A review that passed local validation and may be sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRating {
    pub restaurant_id: RestaurantId,
    pub score: u8,
    pub text: String,
}

impl NewRating {
    pub fn new(restaurant_id: RestaurantId, score: i64, text: &str) -> Result<Self, RatingError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(RatingError::OutOfRange);
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(RatingError::CommentEmpty);
        }

        Ok(Self {
            restaurant_id,
            score: score as u8,
            text: text.to_string(),
        })
    }
}

pub fn average_score(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(r.score)).sum();
    Some(f64::from(sum) / ratings.len() as f64)
}
