use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::model::User;

/// Snapshot of the logged-in user kept in session storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_time: Option<DateTime<Utc>>,
}

impl CurrentUser {
    pub fn from_user(user: &User, login_time: DateTime<Utc>) -> Self {
        Self {
            id: user.id.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            gender: user.gender.map(|g| g.to_string()),
            interests: user.interests.clone(),
            country: Some(user.country.clone()),
            login_time: Some(login_time),
        }
    }

    /// Name shown in the navigation bar.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            "User"
        } else {
            &self.full_name
        }
    }
}

/// Lightweight marker written after a successful registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationMarker {
    pub registration_time: DateTime<Utc>,
    pub user_email: String,
    pub registration_success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_current_user_with_camel_case_keys() {
        let user = CurrentUser {
            id: Some("3".to_string()),
            full_name: "Ana López".to_string(),
            email: "ana@example.com".to_string(),
            gender: None,
            interests: vec!["music".to_string()],
            country: None,
            login_time: None,
        };

        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["fullName"], "Ana López");
        assert_eq!(json["interests"][0], "music");
        assert!(json.get("gender").is_none());
    }

    #[test]
    fn should_read_minimal_current_user() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"fullName":"Ana","email":"ana@example.com"}"#).unwrap();
        assert_eq!(user.display_name(), "Ana");
        assert!(user.interests.is_empty());
    }

    #[test]
    fn should_fall_back_to_generic_display_name() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"fullName":"","email":"ana@example.com"}"#).unwrap();
        assert_eq!(user.display_name(), "User");
    }

    #[test]
    fn should_serialize_registration_marker() {
        let marker = RegistrationMarker {
            registration_time: Utc::now(),
            user_email: "ana@example.com".to_string(),
            registration_success: true,
        };

        let json = serde_json::to_value(&marker).unwrap();

        assert_eq!(json["userEmail"], "ana@example.com");
        assert_eq!(json["registrationSuccess"], true);
        assert!(json.get("registrationTime").is_some());
    }
}
