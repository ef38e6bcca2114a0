use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::session::guard::NavigationDecision;
use business::domain::session::model::CurrentUser;
use business::domain::session::use_cases::navigate::NavigationOutcome;
use business::domain::user::model::LoginForm;
use business::domain::user::use_cases::login::LoginOutcome;

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<LoginRequest> for LoginForm {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    pub full_name: String,
    /// Name for the navigation bar, "User" when the name is blank
    pub display_name: String,
    pub email: String,
    #[oai(skip_serializing_if_is_none)]
    pub gender: Option<String>,
    pub interests: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub country: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub login_time: Option<DateTime<Utc>>,
}

impl From<CurrentUser> for CurrentUserResponse {
    fn from(user: CurrentUser) -> Self {
        Self {
            display_name: user.display_name().to_string(),
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            gender: user.gender,
            interests: user.interests,
            country: user.country,
            login_time: user.login_time,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct LoginResponse {
    pub user: CurrentUserResponse,
    /// Route the client should open next
    pub next: String,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            user: outcome.user.into(),
            next: outcome.next.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    pub authorized: bool,
    #[oai(skip_serializing_if_is_none)]
    pub user: Option<CurrentUserResponse>,
}

/// Result of running the route guards.
#[derive(Debug, Clone, Object)]
pub struct NavigationResponse {
    /// Whether the requested route is shown
    pub admitted: bool,
    /// Admitted route, or the first redirect target
    pub route: String,
    /// Route shown after following every redirect
    pub destination: String,
}

impl From<NavigationOutcome> for NavigationResponse {
    fn from(outcome: NavigationOutcome) -> Self {
        Self {
            admitted: outcome.decision.is_admitted(),
            route: outcome.decision.route().to_string(),
            destination: outcome.destination.to_string(),
        }
    }
}

impl From<NavigationDecision> for NavigationResponse {
    fn from(decision: NavigationDecision) -> Self {
        Self {
            admitted: decision.is_admitted(),
            route: decision.route().to_string(),
            destination: decision.route().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::session::guard::Route;

    #[test]
    fn should_describe_redirect_chain() {
        let response = NavigationResponse::from(NavigationOutcome {
            decision: NavigationDecision::Redirect(Route::Landing),
            destination: Route::Register,
        });

        assert!(!response.admitted);
        assert_eq!(response.route, "/");
        assert_eq!(response.destination, "/register");
    }

    #[test]
    fn should_fall_back_to_generic_display_name() {
        let response = CurrentUserResponse::from(CurrentUser {
            id: None,
            full_name: String::new(),
            email: "ana@example.com".to_string(),
            gender: None,
            interests: Vec::new(),
            country: None,
            login_time: None,
        });

        assert_eq!(response.display_name, "User");
    }
}
