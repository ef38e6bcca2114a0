use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::country::model::Country;
use business::domain::user::model::{BIRTH_DATE_FORMAT, User};

/// Ids arrive as JSON numbers or strings depending on the record.
fn id_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
pub struct CountryDto {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl CountryDto {
    pub fn into_domain(self) -> Country {
        Country::new(
            id_to_string(&self.id).unwrap_or_default(),
            self.name,
            self.code,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub country: String,
}

impl UserDto {
    pub fn into_domain(self) -> User {
        User {
            id: id_to_string(&self.id),
            full_name: self.full_name,
            email: self.email,
            password: self.password,
            birth_date: self.birth_date.as_deref().and_then(parse_birth_date),
            gender: self.gender.and_then(|g| g.parse().ok()),
            interests: self.interests,
            country: self.country,
        }
    }
}

/// Accepts a bare date or a full timestamp and keeps the calendar date.
fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, BIRTH_DATE_FORMAT).ok()
}

/// Body of `POST /users`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDto<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub interests: &'a [String],
    pub country: &'a str,
}

impl<'a> NewUserDto<'a> {
    /// The confirmation was checked locally, so it mirrors the password.
    pub fn from_domain(user: &'a User) -> Self {
        Self {
            full_name: &user.full_name,
            email: &user.email,
            password: &user.password,
            confirm_password: &user.password,
            birth_date: user
                .birth_date
                .map(|d| format!("{}T00:00:00.000Z", d.format(BIRTH_DATE_FORMAT))),
            gender: user.gender.map(|g| g.to_string()),
            interests: &user.interests,
            country: &user.country,
        }
    }
}
