use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::catalog::default_catalog;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

/// Product repository over a fixed, in-process collection.
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Repository seeded with the demo catalog.
    pub fn with_default_catalog() -> Result<Self, ProductError> {
        Ok(Self::new(default_catalog()?))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: u32) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_serve_default_catalog_in_order() {
        let repository = InMemoryProductRepository::with_default_catalog().unwrap();

        let products = repository.get_all().await.unwrap();

        assert_eq!(products.len(), 12);
        let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn should_find_product_by_id() {
        let repository = InMemoryProductRepository::with_default_catalog().unwrap();

        let product = repository.get_by_id(9).await.unwrap();

        assert_eq!(product.name, "Mechanical Keyboard");
    }

    #[tokio::test]
    async fn should_report_missing_product() {
        let repository = InMemoryProductRepository::new(Vec::new());

        let result = repository.get_by_id(1).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }
}
