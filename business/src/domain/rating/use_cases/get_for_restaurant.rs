use async_trait::async_trait;

use crate::domain::rating::errors::RatingError;
use crate::domain::rating::model::Rating;
use crate::domain::shared::value_objects::RestaurantId;

pub struct GetRestaurantRatingsParams {
    pub restaurant_id: RestaurantId,
}

#[async_trait]
pub trait GetRestaurantRatingsUseCase: Send + Sync {
    async fn execute(&self, params: GetRestaurantRatingsParams) -> Result<Vec<Rating>, RatingError>;
}
