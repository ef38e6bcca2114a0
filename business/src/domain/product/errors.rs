#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.unavailable")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
