use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::restaurant::gateway::RestaurantGateway;
use business::domain::restaurant::model::Restaurant;
use business::domain::shared::value_objects::RestaurantId;

use crate::client::ApiClient;
use crate::dto::RestaurantDto;

pub struct RestaurantGatewayHttp {
    client: ApiClient,
}

impl RestaurantGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RestaurantGateway for RestaurantGatewayHttp {
    async fn get_all(&self) -> Result<Vec<Restaurant>, GatewayError> {
        let dtos: Vec<RestaurantDto> = self.client.get_json("/api/restaurants").await?;
        Ok(dtos.into_iter().map(RestaurantDto::into_domain).collect())
    }

    async fn get_by_id(&self, id: RestaurantId) -> Result<Restaurant, GatewayError> {
        let dto: RestaurantDto = self
            .client
            .get_json(&format!("/api/restaurants/{}", id))
            .await?;
        Ok(dto.into_domain())
    }
}
