use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::gateway::RestaurantGateway;
use crate::domain::restaurant::model::Restaurant;
use crate::domain::restaurant::use_cases::get_by_id::{
    GetRestaurantByIdParams, GetRestaurantByIdUseCase,
};

pub struct GetRestaurantByIdUseCaseImpl {
    pub gateway: Arc<dyn RestaurantGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRestaurantByIdUseCase for GetRestaurantByIdUseCaseImpl {
    async fn execute(&self, params: GetRestaurantByIdParams) -> Result<Restaurant, RestaurantError> {
        self.logger
            .info(&format!("Fetching restaurant: {}", params.id));

        self.gateway
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound => RestaurantError::NotFound,
                other => RestaurantError::Gateway(other),
            })
    }
}
