use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::session::guard;
use business::domain::session::use_cases::logout::LogoutUseCase;
use business::domain::session::use_cases::navigate::{
    GetCurrentUserUseCase, NavigateParams, NavigateUseCase,
};
use business::domain::user::errors::UserError;
use business::domain::user::use_cases::login::LoginUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::dto::{LoginRequest, LoginResponse, NavigationResponse, SessionResponse};
use crate::api::session_storage::SessionStorage;
use crate::api::tags::ApiTags;
use crate::api::user::dto::ValidationReport;

pub struct SessionApi {
    login_use_case: Arc<dyn LoginUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
    navigate_use_case: Arc<dyn NavigateUseCase>,
    current_user_use_case: Arc<dyn GetCurrentUserUseCase>,
}

impl SessionApi {
    pub fn new(
        login_use_case: Arc<dyn LoginUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
        navigate_use_case: Arc<dyn NavigateUseCase>,
        current_user_use_case: Arc<dyn GetCurrentUserUseCase>,
    ) -> Self {
        Self {
            login_use_case,
            logout_use_case,
            navigate_use_case,
            current_user_use_case,
        }
    }
}

/// Session API
///
/// Login, logout and route guards over the server-side session.
#[OpenApi]
impl SessionApi {
    /// Log in
    ///
    /// Matches the credentials against the remote user list and stores the
    /// user in the session.
    #[oai(path = "/login", method = "post", tag = "ApiTags::Session")]
    async fn login(&self, session: &Session, body: Json<LoginRequest>) -> LoginApiResponse {
        match self
            .login_use_case
            .execute(&SessionStorage(session), body.0.into())
            .await
        {
            Ok(outcome) => LoginApiResponse::Ok(Json(outcome.into())),
            Err(UserError::Validation(result)) => LoginApiResponse::BadRequest(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginApiResponse::Unauthorized(json),
                    502 => LoginApiResponse::BadGateway(json),
                    _ => LoginApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Log out
    ///
    /// Clears every session key and redirects to the landing route.
    #[oai(path = "/logout", method = "post", tag = "ApiTags::Session")]
    async fn logout(&self, session: &Session) -> Json<NavigationResponse> {
        let decision = self.logout_use_case.execute(&SessionStorage(session));
        Json(decision.into())
    }

    /// Current session
    #[oai(path = "/session", method = "get", tag = "ApiTags::Session")]
    async fn current_session(&self, session: &Session) -> Json<SessionResponse> {
        let store = SessionStorage(session);
        Json(SessionResponse {
            authorized: guard::is_authorized(&store),
            user: self.current_user_use_case.execute(&store).map(Into::into),
        })
    }

    /// Run the route guards
    ///
    /// Tells whether `path` is shown to this session and where redirects lead.
    #[oai(path = "/navigate", method = "get", tag = "ApiTags::Session")]
    async fn navigate(&self, session: &Session, path: Query<String>) -> Json<NavigationResponse> {
        let outcome = self
            .navigate_use_case
            .execute(&SessionStorage(session), NavigateParams { path: path.0 });
        Json(outcome.into())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginApiResponse {
    #[oai(status = 200)]
    Ok(Json<LoginResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationReport>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
