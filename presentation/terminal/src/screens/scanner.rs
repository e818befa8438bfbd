use std::sync::Arc;

use business::domain::scan::model::ScannedLink;
use business::domain::scan::use_cases::resolve::{
    ResolveScannedLinkParams, ResolveScannedLinkUseCase,
};
use business::domain::shared::value_objects::RestaurantId;

use crate::alert::IntoAlert;

/// What the session should do with a scanned code.
#[derive(Debug, PartialEq)]
pub enum ScanOutcome {
    OpenRestaurant(RestaurantId),
    Message(String),
}

/// Receives the text of a scanned QR code; camera capture happens outside.
pub struct ScannerScreen {
    resolve_use_case: Arc<dyn ResolveScannedLinkUseCase>,
}

impl ScannerScreen {
    pub fn new(resolve_use_case: Arc<dyn ResolveScannedLinkUseCase>) -> Self {
        Self { resolve_use_case }
    }

    pub fn scan(&self, data: String) -> ScanOutcome {
        match self
            .resolve_use_case
            .execute(ResolveScannedLinkParams { data })
        {
            Ok(ScannedLink::Restaurant(id)) => ScanOutcome::OpenRestaurant(id),
            Ok(ScannedLink::External(url)) => {
                ScanOutcome::Message(format!("Open in your browser: {}", url))
            }
            Err(e) => ScanOutcome::Message(e.into_alert().to_string()),
        }
    }
}
