use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::gateway::PaymentGateway;
use crate::domain::payment::model::{PaymentRequest, PaymentSession};
use crate::domain::payment::use_cases::create_session::{
    CreatePaymentSessionParams, CreatePaymentSessionUseCase,
};

pub struct CreatePaymentSessionUseCaseImpl {
    pub gateway: Arc<dyn PaymentGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreatePaymentSessionUseCase for CreatePaymentSessionUseCaseImpl {
    async fn execute(
        &self,
        params: CreatePaymentSessionParams,
    ) -> Result<PaymentSession, PaymentError> {
        let request = PaymentRequest::from_amount(params.amount)?;

        self.logger.info(&format!(
            "Creating payment session for {} {}",
            request.amount, request.currency
        ));

        let session = self.gateway.create_session(&request).await?;
        self.logger.debug("Payment session created");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub PaymentGw {}

        #[async_trait]
        impl PaymentGateway for PaymentGw {
            async fn create_session(&self, request: &PaymentRequest) -> Result<PaymentSession, GatewayError>;
        }
    }

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

    #[tokio::test]
    async fn should_request_session_in_minor_units() {
        let mut mock_gateway = MockPaymentGw::new();
        mock_gateway
            .expect_create_session()
            .withf(|request| request.amount == 7500 && request.currency == "dkk")
            .returning(|_| {
                Ok(PaymentSession {
                    client_secret: "pi_123_secret_abc".to_string(),
                })
            });

        let use_case = CreatePaymentSessionUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreatePaymentSessionParams {
                amount: Decimal::new(75, 0),
            })
            .await;

        assert_eq!(result.unwrap().client_secret, "pi_123_secret_abc");
    }

    #[tokio::test]
    async fn should_reject_zero_amount_without_calling_backend() {
        let mut mock_gateway = MockPaymentGw::new();
        mock_gateway.expect_create_session().times(0);

        let use_case = CreatePaymentSessionUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreatePaymentSessionParams {
                amount: Decimal::ZERO,
            })
            .await;

        assert!(matches!(result.unwrap_err(), PaymentError::InvalidAmount));
    }

    #[tokio::test]
    async fn should_surface_gateway_failure() {
        let mut mock_gateway = MockPaymentGw::new();
        mock_gateway
            .expect_create_session()
            .returning(|_| Err(GatewayError::MalformedResponse));

        let use_case = CreatePaymentSessionUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreatePaymentSessionParams {
                amount: Decimal::new(10, 0),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            PaymentError::Gateway(GatewayError::MalformedResponse)
        ));
    }
}
