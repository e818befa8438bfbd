use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScannedLink;

pub struct ResolveScannedLinkParams {
    pub data: String,
}

/// Runs synchronously: resolving a scan needs no backend call.
pub trait ResolveScannedLinkUseCase: Send + Sync {
    fn execute(&self, params: ResolveScannedLinkParams) -> Result<ScannedLink, ScanError>;
}
