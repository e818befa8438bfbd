use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::menu::gateway::MenuGateway;
use business::domain::menu::model::{Menu, MenuItem, MenuSection, Tag};

use crate::client::ApiClient;
use crate::dto::{MenuDto, MenuItemDto, MenuSectionDto, TagDto};

pub struct MenuGatewayHttp {
    client: ApiClient,
}

impl MenuGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MenuGateway for MenuGatewayHttp {
    async fn get_menus(&self) -> Result<Vec<Menu>, GatewayError> {
        let dtos: Vec<MenuDto> = self.client.get_json("/api/menus").await?;
        Ok(dtos.into_iter().map(MenuDto::into_domain).collect())
    }

    async fn get_sections(&self) -> Result<Vec<MenuSection>, GatewayError> {
        let dtos: Vec<MenuSectionDto> = self.client.get_json("/api/menusections").await?;
        Ok(dtos.into_iter().map(MenuSectionDto::into_domain).collect())
    }

    async fn get_items(&self) -> Result<Vec<MenuItem>, GatewayError> {
        let dtos: Vec<MenuItemDto> = self.client.get_json("/api/menuitems").await?;
        Ok(dtos.into_iter().map(MenuItemDto::into_domain).collect())
    }

    async fn get_tags(&self) -> Result<Vec<Tag>, GatewayError> {
        let dtos: Vec<TagDto> = self.client.get_json("/api/tags").await?;
        Ok(dtos.into_iter().map(TagDto::into_domain).collect())
    }
}
