use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::query::{ProductFilters, ProductsResponse};

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, filters: ProductFilters) -> Result<ProductsResponse, ProductError>;
}
