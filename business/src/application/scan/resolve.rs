use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScannedLink;
use crate::domain::scan::use_cases::resolve::{
    ResolveScannedLinkParams, ResolveScannedLinkUseCase,
};

pub struct ResolveScannedLinkUseCaseImpl {
    /// URL scheme registered by the app, e.g. "myapp".
    pub app_scheme: String,
    pub logger: Arc<dyn Logger>,
}

impl ResolveScannedLinkUseCase for ResolveScannedLinkUseCaseImpl {
    fn execute(&self, params: ResolveScannedLinkParams) -> Result<ScannedLink, ScanError> {
        self.logger.debug(&format!("Resolving scanned code: {}", params.data));

        ScannedLink::parse(&params.data, &self.app_scheme).inspect_err(|e| {
            self.logger
                .warn(&format!("Unusable QR code '{}': {}", params.data, e));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::RestaurantId;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[test]
    fn should_resolve_restaurant_link_with_configured_scheme() {
        let use_case = ResolveScannedLinkUseCaseImpl {
            app_scheme: "jamnaw".to_string(),
            logger: mock_logger(),
        };

        let result = use_case.execute(ResolveScannedLinkParams {
            data: "jamnaw://restaurant?id=12".to_string(),
        });

        assert_eq!(result.unwrap(), ScannedLink::Restaurant(RestaurantId::new(12)));
    }

    #[test]
    fn should_warn_on_unusable_code() {
        let mut logger = MockLog::new();
        logger.expect_debug().returning(|_| ());
        logger.expect_warn().times(1).returning(|_| ());

        let use_case = ResolveScannedLinkUseCaseImpl {
            app_scheme: "myapp".to_string(),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(ResolveScannedLinkParams {
            data: "not a link".to_string(),
        });

        assert!(matches!(result.unwrap_err(), ScanError::InvalidLink));
    }
}
