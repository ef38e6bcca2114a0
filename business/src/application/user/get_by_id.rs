use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::gateway::UserGateway;
use crate::domain::user::model::User;
use crate::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};

pub struct GetUserByIdUseCaseImpl {
    pub gateway: Arc<dyn UserGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserByIdUseCase for GetUserByIdUseCaseImpl {
    async fn execute(&self, params: GetUserByIdParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Fetching user with id: {}", params.id));

        match self.gateway.get_by_id(&params.id).await {
            Ok(user) => Ok(user),
            Err(GatewayError::Status(404)) => Err(UserError::NotFound),
            Err(e) => {
                self.logger.error(&format!("Error fetching user: {}", e));
                Err(e.into())
            }
        }
    }
}
