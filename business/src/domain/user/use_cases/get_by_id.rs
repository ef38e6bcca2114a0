use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct GetUserByIdParams {
    pub id: String,
}

#[async_trait]
pub trait GetUserByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetUserByIdParams) -> Result<User, UserError>;
}
