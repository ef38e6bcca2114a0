use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            UserError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.validation_failed",
            ),
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "user.invalid_credentials",
            ),
            UserError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "user.not_found"),
            UserError::Session => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "user.session_write_failed",
            ),
            UserError::Gateway(_) => (
                StatusCode::BAD_GATEWAY,
                "GatewayError",
                "user.gateway_unavailable",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::GatewayError;

    #[test]
    fn should_hide_gateway_details_behind_generic_message() {
        let (status, json) = UserError::Gateway(GatewayError::Status(500)).into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json.0.message, "user.gateway_unavailable");
    }

    #[test]
    fn should_map_invalid_credentials_to_401() {
        let (status, json) = UserError::InvalidCredentials.into_error_response();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json.0.name, "Unauthorized");
    }
}
