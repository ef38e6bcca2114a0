use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::country::directory::CountryDirectory;
use crate::domain::country::errors::CountryError;
use crate::domain::country::fallback::fallback_country_by_id;
use crate::domain::country::model::Country;
use crate::domain::country::use_cases::get_by_id::{GetCountryByIdParams, GetCountryByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetCountryByIdUseCaseImpl {
    pub directory: Arc<dyn CountryDirectory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCountryByIdUseCase for GetCountryByIdUseCaseImpl {
    async fn execute(&self, params: GetCountryByIdParams) -> Result<Country, CountryError> {
        match self.directory.fetch_by_id(&params.id).await {
            Ok(country) => Ok(country),
            Err(e) => {
                self.logger.warn(&format!(
                    "Failed to fetch country {}, searching fallback data: {}",
                    params.id, e
                ));
                fallback_country_by_id(&params.id).ok_or(CountryError::NotFound)
            }
        }
    }
}
