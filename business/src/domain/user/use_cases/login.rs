use async_trait::async_trait;

use crate::domain::session::guard::Route;
use crate::domain::session::model::CurrentUser;
use crate::domain::session::storage::KeyValueStore;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::LoginForm;

#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user: CurrentUser,
    pub next: Route,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(
        &self,
        store: &dyn KeyValueStore,
        form: LoginForm,
    ) -> Result<LoginOutcome, UserError>;
}
