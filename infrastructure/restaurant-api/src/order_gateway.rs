use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::order::gateway::OrderGateway;
use business::domain::order::model::{OrderConfirmation, OrderRequest};

use crate::client::ApiClient;
use crate::dto::{OrderConfirmationDto, OrderRequestDto};

pub struct OrderGatewayHttp {
    client: ApiClient,
}

impl OrderGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderGateway for OrderGatewayHttp {
    async fn place(&self, order: &OrderRequest) -> Result<OrderConfirmation, GatewayError> {
        let dto: OrderConfirmationDto = self
            .client
            .post_json("/api/orders", &OrderRequestDto::from(order))
            .await?;
        Ok(dto.into_domain())
    }
}
