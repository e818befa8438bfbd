#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("order.missing_restaurant")]
    MissingRestaurant,
    #[error("gateway.request_failed")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
