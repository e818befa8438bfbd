use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Menu, MenuItem, MenuSection, Tag};

/// The backend exposes menus, sections and items as flat collections.
#[async_trait]
pub trait MenuGateway: Send + Sync {
    async fn get_menus(&self) -> Result<Vec<Menu>, GatewayError>;
    async fn get_sections(&self) -> Result<Vec<MenuSection>, GatewayError>;
    async fn get_items(&self) -> Result<Vec<MenuItem>, GatewayError>;
    async fn get_tags(&self) -> Result<Vec<Tag>, GatewayError>;
}
