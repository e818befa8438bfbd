use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::model::PaymentSession;

pub struct CreatePaymentSessionParams {
    /// Amount in DKK.
    pub amount: Decimal,
}

#[async_trait]
pub trait CreatePaymentSessionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreatePaymentSessionParams,
    ) -> Result<PaymentSession, PaymentError>;
}
