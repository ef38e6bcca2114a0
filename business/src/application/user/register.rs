use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::session::guard::Route;
use crate::domain::session::model::RegistrationMarker;
use crate::domain::session::storage::{KeyValueStore, REGISTRATION_DATA_KEY};
use crate::domain::user::errors::UserError;
use crate::domain::user::gateway::UserGateway;
use crate::domain::user::model::User;
use crate::domain::user::use_cases::register::{
    RegisterUserParams, RegisterUserUseCase, Registration, ValidateRegistrationUseCase,
};
use crate::domain::user::validation::{self, Field, FieldError, ValidationResult};

/// Runs the local rules, then asks the remote API whether a well-formed
/// email is already taken. A failed lookup is logged and not flagged.
async fn validate_with_email_check(
    gateway: &dyn UserGateway,
    logger: &dyn Logger,
    params: &RegisterUserParams,
) -> ValidationResult {
    let mut result =
        validation::validate_registration(&params.form, params.today, &params.countries);

    if result.is_field_valid(Field::Email) {
        match gateway.find_by_email(params.form.email.trim()).await {
            Ok(users) if !users.is_empty() => result.add(Field::Email, FieldError::EmailExists),
            Ok(_) => {}
            Err(e) => logger.error(&format!("Error checking email: {}", e)),
        }
    }
    result
}

pub struct ValidateRegistrationUseCaseImpl {
    pub gateway: Arc<dyn UserGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ValidateRegistrationUseCase for ValidateRegistrationUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> ValidationResult {
        validate_with_email_check(self.gateway.as_ref(), self.logger.as_ref(), &params).await
    }
}

pub struct RegisterUserUseCaseImpl {
    pub gateway: Arc<dyn UserGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(
        &self,
        store: &dyn KeyValueStore,
        params: RegisterUserParams,
    ) -> Result<Registration, UserError> {
        let validation =
            validate_with_email_check(self.gateway.as_ref(), self.logger.as_ref(), &params).await;
        if !validation.is_valid() {
            self.logger.debug("Registration form rejected by validation");
            return Err(UserError::Validation(validation));
        }

        let user = User::from_registration(&params.form);
        let created = self.gateway.register(&user).await.inspect_err(|e| {
            self.logger
                .error(&format!("Registration error for {}: {}", user.email, e))
        })?;

        let marker = RegistrationMarker {
            registration_time: Utc::now(),
            user_email: created.email.clone(),
            registration_success: true,
        };
        let serialized = serde_json::to_string(&marker).map_err(|_| UserError::Session)?;
        store.set(REGISTRATION_DATA_KEY, &serialized);

        self.logger
            .info(&format!("User registered successfully: {}", created.email));
        Ok(Registration {
            user: created,
            next: Route::Login,
        })
    }
}
