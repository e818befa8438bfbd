#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("scan.invalid_link")]
    InvalidLink,
    #[error("scan.unsupported_scheme")]
    UnsupportedScheme,
}
