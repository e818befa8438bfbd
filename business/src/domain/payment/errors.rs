#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment.invalid_amount")]
    InvalidAmount,
    #[error("gateway.request_failed")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
