use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderConfirmation;

pub struct PlaceOrderParams {
    pub cart: Cart,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderConfirmation, OrderError>;
}
