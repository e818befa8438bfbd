use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::payment::gateway::PaymentGateway;
use business::domain::payment::model::{PaymentRequest, PaymentSession};

use crate::client::ApiClient;
use crate::dto::{PaymentIntentRequestDto, PaymentIntentResponseDto};

pub struct PaymentGatewayHttp {
    client: ApiClient,
}

impl PaymentGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentGateway for PaymentGatewayHttp {
    async fn create_session(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentSession, GatewayError> {
        let dto: PaymentIntentResponseDto = self
            .client
            .post_json(
                "/api/payments/create-payment-intent",
                &PaymentIntentRequestDto::from(request),
            )
            .await?;
        Ok(dto.into_domain())
    }
}
