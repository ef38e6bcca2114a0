use async_trait::async_trait;

use crate::domain::country::model::Country;

/// Never fails: an unreachable directory yields the fallback list.
#[async_trait]
pub trait GetCountriesUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Country>;
}
