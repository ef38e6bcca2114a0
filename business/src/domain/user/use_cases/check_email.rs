use async_trait::async_trait;

use crate::domain::user::errors::UserError;

pub struct CheckEmailParams {
    pub email: String,
}

#[async_trait]
pub trait CheckEmailExistsUseCase: Send + Sync {
    async fn execute(&self, params: CheckEmailParams) -> Result<bool, UserError>;
}
