use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::gateway::UserGateway;
use crate::domain::user::use_cases::check_email::{CheckEmailExistsUseCase, CheckEmailParams};

pub struct CheckEmailExistsUseCaseImpl {
    pub gateway: Arc<dyn UserGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckEmailExistsUseCase for CheckEmailExistsUseCaseImpl {
    async fn execute(&self, params: CheckEmailParams) -> Result<bool, UserError> {
        let users = self
            .gateway
            .find_by_email(&params.email)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Error checking email {}: {}", params.email, e))
            })?;
        Ok(!users.is_empty())
    }
}
