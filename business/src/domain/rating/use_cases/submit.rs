use async_trait::async_trait;

use crate::domain::rating::errors::RatingError;
use crate::domain::rating::model::NewRating;
use crate::domain::shared::value_objects::RestaurantId;

pub struct SubmitRatingParams {
    pub restaurant_id: RestaurantId,
    pub score: i64,
    pub text: String,
}

#[async_trait]
pub trait SubmitRatingUseCase: Send + Sync {
    async fn execute(&self, params: SubmitRatingParams) -> Result<NewRating, RatingError>;
}
