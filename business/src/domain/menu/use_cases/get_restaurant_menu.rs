use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::RestaurantMenu;
use crate::domain::shared::value_objects::RestaurantId;

pub struct GetRestaurantMenuParams {
    pub restaurant_id: RestaurantId,
}

#[async_trait]
pub trait GetRestaurantMenuUseCase: Send + Sync {
    async fn execute(&self, params: GetRestaurantMenuParams) -> Result<RestaurantMenu, MenuError>;
}
