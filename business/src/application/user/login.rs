use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::session::guard::Route;
use crate::domain::session::model::CurrentUser;
use crate::domain::session::storage::{CURRENT_USER_KEY, IS_LOGGED_IN_KEY, KeyValueStore};
use crate::domain::user::errors::UserError;
use crate::domain::user::gateway::UserGateway;
use crate::domain::user::model::LoginForm;
use crate::domain::user::use_cases::login::{LoginOutcome, LoginUseCase};
use crate::domain::user::validation;

pub struct LoginUseCaseImpl {
    pub gateway: Arc<dyn UserGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(
        &self,
        store: &dyn KeyValueStore,
        form: LoginForm,
    ) -> Result<LoginOutcome, UserError> {
        let validation = validation::validate_login(&form);
        if !validation.is_valid() {
            return Err(UserError::Validation(validation));
        }

        let users = self.gateway.get_all().await.inspect_err(|e| {
            self.logger.error(&format!("Login error: {}", e));
        })?;

        let Some(user) = users
            .iter()
            .find(|u| u.has_credentials(&form.email, &form.password))
        else {
            self.logger
                .warn(&format!("Invalid credentials for {}", form.email));
            return Err(UserError::InvalidCredentials);
        };

        let current = CurrentUser::from_user(user, Utc::now());
        let serialized = serde_json::to_string(&current).map_err(|_| UserError::Session)?;
        store.set(CURRENT_USER_KEY, &serialized);
        store.set(IS_LOGGED_IN_KEY, "true");

        self.logger
            .info(&format!("User logged in: {}", current.email));
        Ok(LoginOutcome {
            user: current,
            next: Route::Dashboard,
        })
    }
}
