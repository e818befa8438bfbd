use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::Tag;

#[async_trait]
pub trait GetAllTagsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Tag>, MenuError>;
}
