use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::rating::errors::RatingError;
use crate::domain::rating::gateway::RatingGateway;
use crate::domain::rating::model::Rating;
use crate::domain::rating::use_cases::get_for_restaurant::{
    GetRestaurantRatingsParams, GetRestaurantRatingsUseCase,
};

pub struct GetRestaurantRatingsUseCaseImpl {
    pub gateway: Arc<dyn RatingGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRestaurantRatingsUseCase for GetRestaurantRatingsUseCaseImpl {
    async fn execute(&self, params: GetRestaurantRatingsParams) -> Result<Vec<Rating>, RatingError> {
        self.logger.info(&format!(
            "Fetching ratings for restaurant: {}",
            params.restaurant_id
        ));

        let ratings: Vec<Rating> = self
            .gateway
            .get_all()
            .await?
            .into_iter()
            .filter(|r| r.restaurant_id == params.restaurant_id)
            .collect();

        self.logger
            .info(&format!("Retrieved {} ratings", ratings.len()));
        Ok(ratings)
    }
}
