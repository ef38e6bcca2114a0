use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::user::model::{RegistrationForm, User};
use business::domain::user::use_cases::register::Registration;
use business::domain::user::validation::{
    FieldError, PasswordRequirements, PasswordStrength, ValidationResult,
};

/// Registration form as typed by the user. Missing fields count as empty.
#[derive(Debug, Clone, Default, Object)]
#[oai(rename_all = "camelCase", default)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// YYYY-MM-DD
    pub birth_date: String,
    /// male, female or other
    pub gender: String,
    pub interests: Vec<String>,
    /// Country id, code or name
    pub country: String,
}

impl From<RegistrationRequest> for RegistrationForm {
    fn from(request: RegistrationRequest) -> Self {
        Self {
            full_name: request.full_name,
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
            birth_date: request.birth_date,
            gender: request.gender,
            interests: request.interests,
            country: request.country,
        }
    }
}

/// A user as stored remotely, without the password.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserProfileResponse {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    pub full_name: String,
    pub email: String,
    #[oai(skip_serializing_if_is_none)]
    pub birth_date: Option<NaiveDate>,
    #[oai(skip_serializing_if_is_none)]
    pub gender: Option<String>,
    pub interests: Vec<String>,
    pub country: String,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            birth_date: user.birth_date,
            gender: user.gender.map(|g| g.to_string()),
            interests: user.interests,
            country: user.country,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RegistrationResponse {
    pub user: UserProfileResponse,
    /// Route the client should open next
    pub next: String,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        Self {
            user: registration.user.into(),
            next: registration.next.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FieldErrorDto {
    /// Short key such as `required` or `minlength`
    pub kind: String,
    /// i18n message code
    pub message: String,
    /// Bound for length and age rules
    #[oai(skip_serializing_if_is_none)]
    pub required: Option<i64>,
    /// Observed length or age
    #[oai(skip_serializing_if_is_none)]
    pub actual: Option<i64>,
}

impl From<&FieldError> for FieldErrorDto {
    fn from(error: &FieldError) -> Self {
        let (required, actual) = match error {
            FieldError::MinLength { required, actual }
            | FieldError::MaxLength { required, actual } => {
                (Some(*required as i64), Some(*actual as i64))
            }
            FieldError::MinimumAge {
                required_age,
                actual_age,
            } => (Some(i64::from(*required_age)), Some(i64::from(*actual_age))),
            _ => (None, None),
        };
        Self {
            kind: error.kind().to_string(),
            message: error.to_string(),
            required,
            actual,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FieldErrorsDto {
    pub field: String,
    pub errors: Vec<FieldErrorDto>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    /// Only fields with at least one error
    pub fields: Vec<FieldErrorsDto>,
    /// Errors spanning several fields
    pub form_errors: Vec<FieldErrorDto>,
}

impl From<ValidationResult> for ValidationReport {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.is_valid(),
            fields: result
                .invalid_fields()
                .map(|(field, errors)| FieldErrorsDto {
                    field: field.to_string(),
                    errors: errors.iter().map(Into::into).collect(),
                })
                .collect(),
            form_errors: result.form_errors().iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PasswordStrengthRequest {
    pub password: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PasswordRequirementsDto {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special_char: bool,
}

#[derive(Debug, Clone, Object)]
pub struct PasswordStrengthResponse {
    /// Satisfied requirements, 0 to 5
    pub score: u8,
    pub label: String,
    pub requirements: PasswordRequirementsDto,
}

impl PasswordStrengthResponse {
    pub fn of(password: &str) -> Self {
        let requirements = PasswordRequirements::of(password);
        let score = requirements.score();
        Self {
            score,
            label: PasswordStrength::from_score(score).label().to_string(),
            requirements: PasswordRequirementsDto {
                min_length: requirements.min_length,
                uppercase: requirements.uppercase,
                lowercase: requirements.lowercase,
                number: requirements.number,
                special_char: requirements.special_char,
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct EmailExistsResponse {
    pub email: String,
    pub exists: bool,
}
