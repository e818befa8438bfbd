use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::gateway::RestaurantGateway;
use crate::domain::restaurant::geo::sort_by_distance;
use crate::domain::restaurant::model::Restaurant;
use crate::domain::restaurant::use_cases::get_all::{
    GetAllRestaurantsParams, GetAllRestaurantsUseCase,
};

pub struct GetAllRestaurantsUseCaseImpl {
    pub gateway: Arc<dyn RestaurantGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllRestaurantsUseCase for GetAllRestaurantsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllRestaurantsParams,
    ) -> Result<Vec<Restaurant>, RestaurantError> {
        self.logger.info("Fetching restaurants");

        let mut restaurants = self.gateway.get_all().await.inspect_err(|e| {
            self.logger
                .error(&format!("Failed to fetch restaurants: {}", e));
        })?;

        if let Some(origin) = params.near {
            sort_by_distance(&mut restaurants, origin);
        }

        self.logger
            .info(&format!("Retrieved {} restaurants", restaurants.len()));
        Ok(restaurants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::restaurant::model::GeoPoint;
    use crate::domain::shared::value_objects::RestaurantId;
    use mockall::mock;

    mock! {
        pub RestaurantGw {}

        #[async_trait]
        impl RestaurantGateway for RestaurantGw {
            async fn get_all(&self) -> Result<Vec<Restaurant>, GatewayError>;
            async fn get_by_id(&self, id: RestaurantId) -> Result<Restaurant, GatewayError>;
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

    fn located(id: i64, latitude: f64, longitude: f64) -> Restaurant {
        let mut restaurant = Restaurant::new(RestaurantId::new(id), format!("Cafe {}", id));
        restaurant.location = Some(GeoPoint::new(latitude, longitude));
        restaurant
    }

    #[tokio::test]
    async fn should_return_restaurants_in_backend_order() {
        let mut mock_gateway = MockRestaurantGw::new();
        mock_gateway
            .expect_get_all()
            .returning(|| Ok(vec![located(1, 56.0, 10.0), located(2, 55.78, 12.52)]));

        let use_case = GetAllRestaurantsUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllRestaurantsParams { near: None })
            .await;

        let ids: Vec<i64> = result.unwrap().iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn should_order_nearest_first_when_origin_given() {
        let mut mock_gateway = MockRestaurantGw::new();
        mock_gateway
            .expect_get_all()
            .returning(|| Ok(vec![located(1, 56.0, 10.0), located(2, 55.78, 12.52)]));

        let use_case = GetAllRestaurantsUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllRestaurantsParams {
                near: Some(GeoPoint::new(55.785821, 12.521153)),
            })
            .await;

        let ids: Vec<i64> = result.unwrap().iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn should_propagate_gateway_failure() {
        let mut mock_gateway = MockRestaurantGw::new();
        mock_gateway
            .expect_get_all()
            .returning(|| Err(GatewayError::Unreachable));

        let use_case = GetAllRestaurantsUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllRestaurantsParams { near: None })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RestaurantError::Gateway(GatewayError::Unreachable)
        ));
    }
}
