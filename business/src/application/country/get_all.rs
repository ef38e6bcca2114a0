use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::country::directory::CountryDirectory;
use crate::domain::country::fallback::fallback_countries;
use crate::domain::country::model::Country;
use crate::domain::country::use_cases::get_all::GetCountriesUseCase;
use crate::domain::logger::Logger;

pub struct GetCountriesUseCaseImpl {
    pub directory: Arc<dyn CountryDirectory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCountriesUseCase for GetCountriesUseCaseImpl {
    async fn execute(&self) -> Vec<Country> {
        match self.directory.fetch_all().await {
            Ok(countries) => {
                self.logger
                    .info(&format!("Loaded {} countries", countries.len()));
                countries
            }
            Err(e) => {
                self.logger.warn(&format!(
                    "Failed to fetch countries, using fallback data: {}",
                    e
                ));
                fallback_countries()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use mockall::mock;

    mock! {
        pub Directory {}

        #[async_trait]
        impl CountryDirectory for Directory {
            async fn fetch_all(&self) -> Result<Vec<Country>, GatewayError>;
            async fn fetch_by_id(&self, id: &str) -> Result<Country, GatewayError>;
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

    #[tokio::test]
    async fn should_return_remote_countries_when_available() {
        let mut directory = MockDirectory::new();
        directory
            .expect_fetch_all()
            .returning(|| Ok(vec![Country::new("1", "Chile", "CL")]));
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());

        let use_case = GetCountriesUseCaseImpl {
            directory: Arc::new(directory),
            logger: Arc::new(logger),
        };

        let countries = use_case.execute().await;

        assert_eq!(countries, vec![Country::new("1", "Chile", "CL")]);
    }

    #[tokio::test]
    async fn should_fall_back_and_warn_when_directory_fails() {
        let mut directory = MockDirectory::new();
        directory
            .expect_fetch_all()
            .returning(|| Err(GatewayError::Unreachable));
        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());

        let use_case = GetCountriesUseCaseImpl {
            directory: Arc::new(directory),
            logger: Arc::new(logger),
        };

        let countries = use_case.execute().await;

        assert_eq!(countries.len(), 21);
    }
}
