use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::country::use_cases::get_all::GetCountriesUseCase;
use business::domain::country::use_cases::get_by_id::{
    GetCountryByIdParams, GetCountryByIdUseCase,
};

use crate::api::country::dto::CountryResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CountryApi {
    get_all_use_case: Arc<dyn GetCountriesUseCase>,
    get_by_id_use_case: Arc<dyn GetCountryByIdUseCase>,
}

impl CountryApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetCountriesUseCase>,
        get_by_id_use_case: Arc<dyn GetCountryByIdUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Country directory API
///
/// Served from the remote demo API, or from bundled data when it is down.
#[OpenApi]
impl CountryApi {
    /// List countries
    #[oai(path = "/countries", method = "get", tag = "ApiTags::Countries")]
    async fn get_countries(&self) -> Json<Vec<CountryResponse>> {
        let countries = self.get_all_use_case.execute().await;
        Json(countries.into_iter().map(Into::into).collect())
    }

    /// Get a country by ID
    #[oai(path = "/countries/:id", method = "get", tag = "ApiTags::Countries")]
    async fn get_country_by_id(&self, id: Path<String>) -> GetCountryByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetCountryByIdParams { id: id.0 })
            .await
        {
            Ok(country) => GetCountryByIdResponse::Ok(Json(country.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCountryByIdResponse::NotFound(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCountryByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CountryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}
