use crate::domain::errors::GatewayError;

use super::validation::ValidationResult;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.validation_failed")]
    Validation(ValidationResult),
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.not_found")]
    NotFound,
    #[error("user.session_write_failed")]
    Session,
    #[error("user.gateway_unavailable")]
    Gateway(#[from] GatewayError),
}
