use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::{OrderConfirmation, OrderRequest};
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

pub struct PlaceOrderUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderConfirmation, OrderError> {
        let request = OrderRequest::from_cart(&params.cart)?;

        self.logger.info(&format!(
            "Placing order with {} lines for restaurant {} (total {})",
            request.lines.len(),
            request.restaurant_id,
            request.total
        ));

        let confirmation = self.gateway.place(&request).await.inspect_err(|e| {
            self.logger.error(&format!("Order failed: {}", e));
        })?;

        self.logger
            .info(&format!("Order placed: {}", confirmation.id));
        Ok(confirmation)
    }
}
