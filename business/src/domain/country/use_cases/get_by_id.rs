use async_trait::async_trait;

use crate::domain::country::errors::CountryError;
use crate::domain::country::model::Country;

pub struct GetCountryByIdParams {
    pub id: String,
}

#[async_trait]
pub trait GetCountryByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCountryByIdParams) -> Result<Country, CountryError>;
}
