/// Errors raised by gateway adapters talking to the remote backend.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.unreachable")]
    Unreachable,
    #[error("gateway.timeout")]
    Timeout,
    #[error("gateway.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("gateway.malformed_response")]
    MalformedResponse,
    #[error("gateway.not_found")]
    NotFound,
}

impl GatewayError {
    pub fn unreachable() -> Self {
        GatewayError::Unreachable
    }
    pub fn timeout() -> Self {
        GatewayError::Timeout
    }
    pub fn unexpected_status(status: u16) -> Self {
        GatewayError::UnexpectedStatus(status)
    }
    pub fn malformed_response() -> Self {
        GatewayError::MalformedResponse
    }
    pub fn not_found() -> Self {
        GatewayError::NotFound
    }
}
