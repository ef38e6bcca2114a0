use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::value_objects::Gender;

pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// A user as known to the remote user API.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub interests: Vec<String>,
    pub country: String,
}

impl User {
    /// Builds the user to register from a form that already passed validation.
    pub fn from_registration(form: &RegistrationForm) -> Self {
        Self {
            id: None,
            full_name: form.full_name.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            birth_date: NaiveDate::parse_from_str(form.birth_date.trim(), BIRTH_DATE_FORMAT).ok(),
            gender: form.gender.parse().ok(),
            interests: form.interests.clone(),
            country: form.country.clone(),
        }
    }

    pub fn has_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Raw registration form state, one string per input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub birth_date: String,
    pub gender: String,
    pub interests: Vec<String>,
    pub country: String,
}

/// Raw login form state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_user_from_registration_form() {
        let form = RegistrationForm {
            full_name: " Ana López ".to_string(),
            email: "ana@example.com".to_string(),
            password: "Secret1!x".to_string(),
            confirm_password: "Secret1!x".to_string(),
            birth_date: "1990-04-12".to_string(),
            gender: "female".to_string(),
            interests: vec!["art".to_string()],
            country: "CL".to_string(),
        };

        let user = User::from_registration(&form);

        assert_eq!(user.full_name, "Ana López");
        assert_eq!(user.birth_date, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(user.gender, Some(Gender::Female));
        assert!(user.id.is_none());
    }

    #[test]
    fn should_match_credentials_exactly() {
        let user = User::from_registration(&RegistrationForm {
            email: "ana@example.com".to_string(),
            password: "Secret1!x".to_string(),
            ..Default::default()
        });

        assert!(user.has_credentials("ana@example.com", "Secret1!x"));
        assert!(!user.has_credentials("ana@example.com", "secret1!x"));
        assert!(!user.has_credentials("ANA@example.com", "Secret1!x"));
    }
}
