use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::rating::errors::RatingError;
use crate::domain::rating::gateway::RatingGateway;
use crate::domain::rating::model::NewRating;
use crate::domain::rating::use_cases::submit::{SubmitRatingParams, SubmitRatingUseCase};

pub struct SubmitRatingUseCaseImpl {
    pub gateway: Arc<dyn RatingGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitRatingUseCase for SubmitRatingUseCaseImpl {
    async fn execute(&self, params: SubmitRatingParams) -> Result<NewRating, RatingError> {
        // Validation happens before any network call
        let rating = NewRating::new(params.restaurant_id, params.score, &params.text)
            .inspect_err(|e| {
                self.logger.warn(&format!("Rejected rating: {}", e));
            })?;

        self.logger.info(&format!(
            "Submitting {}-star rating for restaurant {}",
            rating.score, rating.restaurant_id
        ));
        self.gateway.submit(&rating).await?;

        Ok(rating)
    }
}
