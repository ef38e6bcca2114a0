use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::Country;

/// Remote reference data for countries.
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Country>, GatewayError>;
    async fn fetch_by_id(&self, id: &str) -> Result<Country, GatewayError>;
}
