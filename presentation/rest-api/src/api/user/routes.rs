use std::sync::Arc;

use chrono::Utc;
use poem::session::Session;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::country::use_cases::get_all::GetCountriesUseCase;
use business::domain::user::errors::UserError;
use business::domain::user::use_cases::check_email::{CheckEmailExistsUseCase, CheckEmailParams};
use business::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};
use business::domain::user::use_cases::register::{
    RegisterUserParams, RegisterUserUseCase, ValidateRegistrationUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session_storage::SessionStorage;
use crate::api::tags::ApiTags;
use crate::api::user::dto::{
    EmailExistsResponse, PasswordStrengthRequest, PasswordStrengthResponse, RegistrationRequest,
    RegistrationResponse, UserProfileResponse, ValidationReport,
};

pub struct UserApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    validate_use_case: Arc<dyn ValidateRegistrationUseCase>,
    check_email_use_case: Arc<dyn CheckEmailExistsUseCase>,
    get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
    get_countries_use_case: Arc<dyn GetCountriesUseCase>,
}

impl UserApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        validate_use_case: Arc<dyn ValidateRegistrationUseCase>,
        check_email_use_case: Arc<dyn CheckEmailExistsUseCase>,
        get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
        get_countries_use_case: Arc<dyn GetCountriesUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            validate_use_case,
            check_email_use_case,
            get_by_id_use_case,
            get_countries_use_case,
        }
    }

    /// Country must be one of those the form offers.
    async fn registration_params(&self, request: RegistrationRequest) -> RegisterUserParams {
        RegisterUserParams {
            form: request.into(),
            today: Utc::now().date_naive(),
            countries: self.get_countries_use_case.execute().await,
        }
    }
}

/// Registration and user lookup API
#[OpenApi]
impl UserApi {
    /// Validate a registration form
    ///
    /// Runs every field rule and the email-availability check without
    /// registering anything. Call it on each form change.
    #[oai(
        path = "/registration/validate",
        method = "post",
        tag = "ApiTags::Registration"
    )]
    async fn validate_registration(
        &self,
        body: Json<RegistrationRequest>,
    ) -> Json<ValidationReport> {
        let params = self.registration_params(body.0).await;
        Json(self.validate_use_case.execute(params).await.into())
    }

    /// Rate a password
    #[oai(
        path = "/password/strength",
        method = "post",
        tag = "ApiTags::Registration"
    )]
    async fn password_strength(
        &self,
        body: Json<PasswordStrengthRequest>,
    ) -> Json<PasswordStrengthResponse> {
        Json(PasswordStrengthResponse::of(&body.0.password))
    }

    /// Register a user
    ///
    /// Creates the user on the remote API and marks the registration in the
    /// session. The client should continue to the returned route.
    #[oai(path = "/register", method = "post", tag = "ApiTags::Registration")]
    async fn register(
        &self,
        session: &Session,
        body: Json<RegistrationRequest>,
    ) -> RegisterResponse {
        let params = self.registration_params(body.0).await;

        match self
            .register_use_case
            .execute(&SessionStorage(session), params)
            .await
        {
            Ok(registration) => RegisterResponse::Created(Json(registration.into())),
            Err(UserError::Validation(result)) => RegisterResponse::BadRequest(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    502 => RegisterResponse::BadGateway(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Check whether an email is registered
    #[oai(path = "/users/exists", method = "get", tag = "ApiTags::Users")]
    async fn email_exists(&self, email: Query<String>) -> EmailExistsApiResponse {
        let email = email.0;
        match self
            .check_email_use_case
            .execute(CheckEmailParams {
                email: email.clone(),
            })
            .await
        {
            Ok(exists) => EmailExistsApiResponse::Ok(Json(EmailExistsResponse { email, exists })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                EmailExistsApiResponse::BadGateway(json)
            }
        }
    }

    /// Get a user profile by ID
    #[oai(path = "/users/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_user_by_id(&self, id: Path<String>) -> GetUserByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetUserByIdParams { id: id.0 })
            .await
        {
            Ok(user) => GetUserByIdResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetUserByIdResponse::NotFound(json),
                    _ => GetUserByIdResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<RegistrationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationReport>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EmailExistsApiResponse {
    #[oai(status = 200)]
    Ok(Json<EmailExistsResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserByIdResponse {
    #[oai(status = 200)]
    Ok(Json<UserProfileResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
