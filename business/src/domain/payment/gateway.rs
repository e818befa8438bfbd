use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{PaymentRequest, PaymentSession};

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_session(&self, request: &PaymentRequest)
    -> Result<PaymentSession, GatewayError>;
}
