use async_trait::async_trait;

use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::model::{GeoPoint, Restaurant};

pub struct GetAllRestaurantsParams {
    /// When set, restaurants are ordered nearest first.
    pub near: Option<GeoPoint>,
}

#[async_trait]
pub trait GetAllRestaurantsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllRestaurantsParams,
    ) -> Result<Vec<Restaurant>, RestaurantError>;
}
