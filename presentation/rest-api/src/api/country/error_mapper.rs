use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::country::errors::CountryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CountryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CountryError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", "country.not_found")),
            ),
        }
    }
}
