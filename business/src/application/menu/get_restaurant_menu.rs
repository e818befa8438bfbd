use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::gateway::MenuGateway;
use crate::domain::menu::model::RestaurantMenu;
use crate::domain::menu::use_cases::get_restaurant_menu::{
    GetRestaurantMenuParams, GetRestaurantMenuUseCase,
};

pub struct GetRestaurantMenuUseCaseImpl {
    pub gateway: Arc<dyn MenuGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRestaurantMenuUseCase for GetRestaurantMenuUseCaseImpl {
    async fn execute(&self, params: GetRestaurantMenuParams) -> Result<RestaurantMenu, MenuError> {
        self.logger.info(&format!(
            "Fetching menu for restaurant: {}",
            params.restaurant_id
        ));

        let (menus, sections, items) = tokio::try_join!(
            self.gateway.get_menus(),
            self.gateway.get_sections(),
            self.gateway.get_items(),
        )
        .inspect_err(|e| {
            self.logger.error(&format!("Failed to fetch menu: {}", e));
        })?;

        let menu = RestaurantMenu::assemble(params.restaurant_id, menus, sections, items);

        if menu.is_empty() {
            self.logger.warn(&format!(
                "Restaurant {} has no menu items",
                params.restaurant_id
            ));
        }
        Ok(menu)
    }
}
