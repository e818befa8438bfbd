#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("rating.out_of_range")]
    OutOfRange,
    #[error("rating.comment_empty")]
    CommentEmpty,
    #[error("gateway.request_failed")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
