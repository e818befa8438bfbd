use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::gateway::MenuGateway;
use crate::domain::menu::model::Tag;
use crate::domain::menu::use_cases::get_all_tags::GetAllTagsUseCase;

pub struct GetAllTagsUseCaseImpl {
    pub gateway: Arc<dyn MenuGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllTagsUseCase for GetAllTagsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Tag>, MenuError> {
        self.logger.info("Fetching tags");
        let mut tags = self.gateway.get_tags().await?;
        tags.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        tags.dedup_by(|a, b| a.name.eq_ignore_ascii_case(&b.name));
        self.logger.info(&format!("Retrieved {} tags", tags.len()));
        Ok(tags)
    }
}
