use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::RestaurantId;

use super::model::Restaurant;

#[async_trait]
pub trait RestaurantGateway: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Restaurant>, GatewayError>;
    async fn get_by_id(&self, id: RestaurantId) -> Result<Restaurant, GatewayError>;
}
