#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("menu.item_not_found")]
    ItemNotFound,
    #[error("menu.item_unavailable")]
    ItemUnavailable,
    #[error("gateway.request_failed")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
