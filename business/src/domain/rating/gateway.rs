use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{NewRating, Rating};

#[async_trait]
pub trait RatingGateway: Send + Sync {
    /// Ratings of every restaurant; the backend does not filter.
    async fn get_all(&self) -> Result<Vec<Rating>, GatewayError>;
    async fn submit(&self, rating: &NewRating) -> Result<(), GatewayError>;
}
