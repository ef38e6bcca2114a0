use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::InMemoryProductRepository;
use remote_api::client::RemoteApiClient;
use remote_api::country_directory::CountryDirectoryHttp;
use remote_api::user_gateway::UserGatewayHttp;

use business::application::country::get_all::GetCountriesUseCaseImpl;
use business::application::country::get_by_id::GetCountryByIdUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_categories::GetCategoriesUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::session::logout::LogoutUseCaseImpl;
use business::application::session::navigate::{GetCurrentUserUseCaseImpl, NavigateUseCaseImpl};
use business::application::user::check_email::CheckEmailExistsUseCaseImpl;
use business::application::user::get_by_id::GetUserByIdUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::register::{
    RegisterUserUseCaseImpl, ValidateRegistrationUseCaseImpl,
};

use crate::api::country::routes::CountryApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::session::routes::SessionApi;
use crate::api::user::routes::UserApi;
use crate::config::remote_api_config::RemoteApiConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub country_api: CountryApi,
    pub user_api: UserApi,
    pub session_api: SessionApi,
}

impl DependencyContainer {
    pub fn new(remote_api: &RemoteApiConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(InMemoryProductRepository::with_default_catalog()?);
        let client = RemoteApiClient::new(remote_api.base_url.clone())?;
        let country_directory = Arc::new(CountryDirectoryHttp::new(client.clone()));
        let user_gateway = Arc::new(UserGatewayHttp::new(client));

        // Product use cases
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Country use cases
        let get_countries_use_case = Arc::new(GetCountriesUseCaseImpl {
            directory: country_directory.clone(),
            logger: logger.clone(),
        });
        let get_country_use_case = Arc::new(GetCountryByIdUseCaseImpl {
            directory: country_directory,
            logger: logger.clone(),
        });

        // User use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            gateway: user_gateway.clone(),
            logger: logger.clone(),
        });
        let validate_use_case = Arc::new(ValidateRegistrationUseCaseImpl {
            gateway: user_gateway.clone(),
            logger: logger.clone(),
        });
        let check_email_use_case = Arc::new(CheckEmailExistsUseCaseImpl {
            gateway: user_gateway.clone(),
            logger: logger.clone(),
        });
        let get_user_use_case = Arc::new(GetUserByIdUseCaseImpl {
            gateway: user_gateway.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            gateway: user_gateway,
            logger: logger.clone(),
        });

        // Session use cases
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            logger: logger.clone(),
        });
        let navigate_use_case = Arc::new(NavigateUseCaseImpl { logger });

        Ok(Self {
            health_api: HealthApi,
            product_api: ProductApi::new(
                search_use_case,
                get_product_use_case,
                get_categories_use_case,
            ),
            country_api: CountryApi::new(get_countries_use_case.clone(), get_country_use_case),
            user_api: UserApi::new(
                register_use_case,
                validate_use_case,
                check_email_use_case,
                get_user_use_case,
                get_countries_use_case,
            ),
            session_api: SessionApi::new(
                login_use_case,
                logout_use_case,
                navigate_use_case,
                Arc::new(GetCurrentUserUseCaseImpl),
            ),
        })
    }
}
