use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{OrderConfirmation, OrderRequest};

#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn place(&self, order: &OrderRequest) -> Result<OrderConfirmation, GatewayError>;
}
