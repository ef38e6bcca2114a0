use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::query;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_categories::GetCategoriesUseCase;

pub struct GetCategoriesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, ProductError> {
        let catalog = self.repository.get_all().await?;
        let categories = query::categories(&catalog);
        self.logger
            .info(&format!("Found {} product categories", categories.len()));
        Ok(categories)
    }
}
