#[derive(Debug, thiserror::Error)]
pub enum RestaurantError {
    #[error("restaurant.not_found")]
    NotFound,
    #[error("gateway.request_failed")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
