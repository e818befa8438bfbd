use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::rating::gateway::RatingGateway;
use business::domain::rating::model::{NewRating, Rating};

use crate::client::ApiClient;
use crate::dto::{NewRatingDto, RatingDto};

pub struct RatingGatewayHttp {
    client: ApiClient,
}

impl RatingGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RatingGateway for RatingGatewayHttp {
    async fn get_all(&self) -> Result<Vec<Rating>, GatewayError> {
        let dtos: Vec<RatingDto> = self.client.get_json("/api/ratings").await?;
        Ok(dtos.into_iter().map(RatingDto::into_domain).collect())
    }

    async fn submit(&self, rating: &NewRating) -> Result<(), GatewayError> {
        self.client
            .post_no_content("/api/ratings", &NewRatingDto::from(rating))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::client::test_server::serve_once;
    use business::domain::shared::value_objects::RestaurantId;

    #[tokio::test]
    async fn should_accept_created_status_on_submit() {
        let base_url = serve_once("201 Created", "").await;
        let gateway = RatingGatewayHttp::new(ApiClient::new(base_url, Duration::from_secs(5)));
        let rating = NewRating::new(RestaurantId::new(1), 5, "Great").unwrap();

        let result = gateway.submit(&rating).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_surface_rejected_submission() {
        let base_url = serve_once("400 Bad Request", "{}").await;
        let gateway = RatingGatewayHttp::new(ApiClient::new(base_url, Duration::from_secs(5)));
        let rating = NewRating::new(RestaurantId::new(1), 5, "Great").unwrap();

        let result = gateway.submit(&rating).await;

        assert_eq!(result.unwrap_err(), GatewayError::UnexpectedStatus(400));
    }
}
