use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::query::{self, ProductFilters, ProductsResponse};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::SearchProductsUseCase;

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, filters: ProductFilters) -> Result<ProductsResponse, ProductError> {
        self.logger.debug(&format!(
            "Searching products: term={:?} sort_by={} order={} page={} page_size={}",
            filters.search_term,
            filters
                .sort_by
                .map_or_else(|| "none".to_string(), |field| field.to_string()),
            filters.sort_order(),
            filters.page(),
            filters.page_size()
        ));

        let catalog = self.repository.get_all().await?;
        let response = query::query(&catalog, &filters);

        self.logger.info(&format!(
            "Found {} matching products, returning page {} of {}",
            response.total, response.page, response.total_pages
        ));
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::catalog::default_catalog;
    use crate::domain::product::model::Product;
    use crate::domain::product::query::SortBy;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: u32) -> Result<Product, RepositoryError>;
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

    #[tokio::test]
    async fn should_return_first_page_sorted_by_price() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .times(1)
            .returning(|| Ok(default_catalog().unwrap()));

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let response = use_case
            .execute(ProductFilters {
                sort_by: Some(SortBy::Price),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(response.total, 12);
        assert_eq!(response.products.len(), 6);
        assert_eq!(response.products[0].name, "Phone Case");
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::Unavailable));

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(ProductFilters::default()).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
