use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::country::model::Country;
use crate::domain::session::guard::Route;
use crate::domain::session::storage::KeyValueStore;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{RegistrationForm, User};
use crate::domain::user::validation::ValidationResult;

pub struct RegisterUserParams {
    pub form: RegistrationForm,
    pub today: NaiveDate,
    /// Countries offered on the form; empty skips the membership check.
    pub countries: Vec<Country>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub user: User,
    /// Where the client goes next.
    pub next: Route,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        store: &dyn KeyValueStore,
        params: RegisterUserParams,
    ) -> Result<Registration, UserError>;
}

/// Form validation including the remote email-existence check.
#[async_trait]
pub trait ValidateRegistrationUseCase: Send + Sync {
    async fn execute(&self, params: RegisterUserParams) -> ValidationResult;
}
