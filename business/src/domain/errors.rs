/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.unavailable")]
    Unavailable,
}

/// Failures talking to the remote demo API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.unreachable")]
    Unreachable,
    #[error("gateway.status_{0}")]
    Status(u16),
    #[error("gateway.invalid_payload")]
    InvalidPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_status_code_in_gateway_error() {
        assert_eq!(GatewayError::Status(503).to_string(), "gateway.status_503");
    }

    #[test]
    fn should_render_code_style_repository_errors() {
        assert_eq!(RepositoryError::NotFound.to_string(), "repository.not_found");
        assert_eq!(
            RepositoryError::Unavailable.to_string(),
            "repository.unavailable"
        );
    }
}
