//! Field rules for the registration and login forms.
//!
//! Every rule reports all of its failures so the form can show one message
//! per unmet requirement. An empty input only reports [`FieldError::Required`].

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::model::{BIRTH_DATE_FORMAT, LoginForm, RegistrationForm};
use super::value_objects::{Gender, is_known_interest};
use crate::domain::country::model::Country;

pub const FULL_NAME_MIN_LENGTH: usize = 2;
pub const FULL_NAME_MAX_LENGTH: usize = 100;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const MINIMUM_AGE: u32 = 18;
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

const EMAIL_MAX_LENGTH: usize = 254;
const EMAIL_LOCAL_PART_MAX_LENGTH: usize = 64;

static FULL_NAME_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").ok());

static EMAIL_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .ok()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    BirthDate,
    Gender,
    Interests,
    Country,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::FullName => write!(f, "fullName"),
            Field::Email => write!(f, "email"),
            Field::Password => write!(f, "password"),
            Field::ConfirmPassword => write!(f, "confirmPassword"),
            Field::BirthDate => write!(f, "birthDate"),
            Field::Gender => write!(f, "gender"),
            Field::Interests => write!(f, "interests"),
            Field::Country => write!(f, "country"),
        }
    }
}

/// One failed rule. Messages are code-style identifiers for i18n.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("validation.required")]
    Required,
    #[error("validation.min_length")]
    MinLength { required: usize, actual: usize },
    #[error("validation.max_length")]
    MaxLength { required: usize, actual: usize },
    #[error("validation.pattern")]
    Pattern,
    #[error("validation.email")]
    Email,
    #[error("validation.email_exists")]
    EmailExists,
    #[error("validation.has_uppercase")]
    HasUppercase,
    #[error("validation.has_lowercase")]
    HasLowercase,
    #[error("validation.has_number")]
    HasNumber,
    #[error("validation.has_special_char")]
    HasSpecialChar,
    #[error("validation.password_mismatch")]
    PasswordMismatch,
    #[error("validation.minimum_age")]
    MinimumAge { required_age: u32, actual_age: i32 },
    #[error("validation.invalid_date")]
    InvalidDate,
    #[error("validation.invalid_option")]
    InvalidOption,
}

impl FieldError {
    /// Short error key as exposed to form renderers.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::MinLength { .. } => "minlength",
            FieldError::MaxLength { .. } => "maxlength",
            FieldError::Pattern => "pattern",
            FieldError::Email => "email",
            FieldError::EmailExists => "emailExists",
            FieldError::HasUppercase => "hasUppercase",
            FieldError::HasLowercase => "hasLowercase",
            FieldError::HasNumber => "hasNumber",
            FieldError::HasSpecialChar => "hasSpecialChar",
            FieldError::PasswordMismatch => "passwordMismatch",
            FieldError::MinimumAge { .. } => "minimumAge",
            FieldError::InvalidDate => "invalidDate",
            FieldError::InvalidOption => "invalidOption",
        }
    }
}

/// Errors per field plus cross-field errors of the whole form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    fields: BTreeMap<Field, Vec<FieldError>>,
    form: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.form.is_empty() && self.fields.values().all(Vec::is_empty)
    }

    pub fn is_field_valid(&self, field: Field) -> bool {
        self.errors_for(field).is_empty()
    }

    pub fn errors_for(&self, field: Field) -> &[FieldError] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn form_errors(&self) -> &[FieldError] {
        &self.form
    }

    /// Fields with at least one error, in declaration order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = (Field, &[FieldError])> {
        self.fields
            .iter()
            .filter(|(_, errors)| !errors.is_empty())
            .map(|(field, errors)| (*field, errors.as_slice()))
    }

    pub fn add(&mut self, field: Field, error: FieldError) {
        let errors = self.fields.entry(field).or_default();
        if !errors.contains(&error) {
            errors.push(error);
        }
    }

    fn set(&mut self, field: Field, errors: Vec<FieldError>) {
        self.fields.insert(field, errors);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_full_name(value: &str) -> Vec<FieldError> {
    if is_blank(value) {
        return vec![FieldError::Required];
    }

    let mut errors = Vec::new();
    let length = value.chars().count();
    if length < FULL_NAME_MIN_LENGTH {
        errors.push(FieldError::MinLength {
            required: FULL_NAME_MIN_LENGTH,
            actual: length,
        });
    }
    if length > FULL_NAME_MAX_LENGTH {
        errors.push(FieldError::MaxLength {
            required: FULL_NAME_MAX_LENGTH,
            actual: length,
        });
    }
    let matches = FULL_NAME_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(value));
    if !matches {
        errors.push(FieldError::Pattern);
    }
    errors
}

pub fn is_email_shaped(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    value.len() <= EMAIL_MAX_LENGTH
        && local.len() <= EMAIL_LOCAL_PART_MAX_LENGTH
        && EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(value))
}

pub fn validate_email(value: &str) -> Vec<FieldError> {
    if is_blank(value) {
        return vec![FieldError::Required];
    }
    if is_email_shaped(value) {
        Vec::new()
    } else {
        vec![FieldError::Email]
    }
}

/// Which composition rules a password satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special_char: bool,
}

impl PasswordRequirements {
    pub fn of(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= PASSWORD_MIN_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special_char: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    /// Number of satisfied rules, 0 to 5.
    pub fn score(&self) -> u8 {
        [
            self.min_length,
            self.uppercase,
            self.lowercase,
            self.number,
            self.special_char,
        ]
        .into_iter()
        .filter(|met| *met)
        .count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => PasswordStrength::VeryWeak,
            2 => PasswordStrength::Weak,
            3 => PasswordStrength::Medium,
            4 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn of(password: &str) -> Self {
        Self::from_score(PasswordRequirements::of(password).score())
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very strong",
        }
    }
}

pub fn validate_password(value: &str) -> Vec<FieldError> {
    if value.is_empty() {
        return vec![FieldError::Required];
    }

    let met = PasswordRequirements::of(value);
    let mut errors = Vec::new();
    if !met.min_length {
        errors.push(FieldError::MinLength {
            required: PASSWORD_MIN_LENGTH,
            actual: value.chars().count(),
        });
    }
    if !met.uppercase {
        errors.push(FieldError::HasUppercase);
    }
    if !met.lowercase {
        errors.push(FieldError::HasLowercase);
    }
    if !met.number {
        errors.push(FieldError::HasNumber);
    }
    if !met.special_char {
        errors.push(FieldError::HasSpecialChar);
    }
    errors
}

pub fn validate_confirm_password(password: &str, confirm_password: &str) -> Vec<FieldError> {
    if confirm_password.is_empty() {
        return vec![FieldError::Required];
    }
    if !password.is_empty() && password != confirm_password {
        return vec![FieldError::PasswordMismatch];
    }
    Vec::new()
}

/// Cross-field rule evaluated on the whole form.
pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    password == confirm_password
}

/// Whole years between `birth_date` and `today`, counting a year only once
/// its anniversary has been reached.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

pub fn validate_birth_date(value: &str, today: NaiveDate) -> Vec<FieldError> {
    if is_blank(value) {
        return vec![FieldError::Required];
    }
    let Ok(birth_date) = NaiveDate::parse_from_str(value.trim(), BIRTH_DATE_FORMAT) else {
        return vec![FieldError::InvalidDate];
    };

    let age = age_on(birth_date, today);
    if age >= MINIMUM_AGE as i32 {
        Vec::new()
    } else {
        vec![FieldError::MinimumAge {
            required_age: MINIMUM_AGE,
            actual_age: age,
        }]
    }
}

pub fn validate_gender(value: &str) -> Vec<FieldError> {
    if is_blank(value) {
        return vec![FieldError::Required];
    }
    match value.parse::<Gender>() {
        Ok(_) => Vec::new(),
        Err(_) => vec![FieldError::InvalidOption],
    }
}

pub fn validate_interests(values: &[String]) -> Vec<FieldError> {
    if values.is_empty() {
        return vec![FieldError::Required];
    }
    if values.iter().all(|v| is_known_interest(v)) {
        Vec::new()
    } else {
        vec![FieldError::InvalidOption]
    }
}

/// `known` may be empty when no country list has been loaded yet; only
/// presence is checked then.
pub fn validate_country(value: &str, known: &[Country]) -> Vec<FieldError> {
    if is_blank(value) {
        return vec![FieldError::Required];
    }
    if known.is_empty() || known.iter().any(|c| c.is_selected_by(value)) {
        Vec::new()
    } else {
        vec![FieldError::InvalidOption]
    }
}

/// Validates the full registration form. Invoke again on every change.
pub fn validate_registration(
    form: &RegistrationForm,
    today: NaiveDate,
    known_countries: &[Country],
) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.set(Field::FullName, validate_full_name(&form.full_name));
    result.set(Field::Email, validate_email(&form.email));
    result.set(Field::Password, validate_password(&form.password));
    result.set(
        Field::ConfirmPassword,
        validate_confirm_password(&form.password, &form.confirm_password),
    );
    result.set(Field::BirthDate, validate_birth_date(&form.birth_date, today));
    result.set(Field::Gender, validate_gender(&form.gender));
    result.set(Field::Interests, validate_interests(&form.interests));
    result.set(Field::Country, validate_country(&form.country, known_countries));

    if !passwords_match(&form.password, &form.confirm_password) {
        result.form.push(FieldError::PasswordMismatch);
    }
    result
}

/// Login only checks presence and email shape; composition rules apply to
/// new credentials, not to existing ones.
pub fn validate_login(form: &LoginForm) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.set(Field::Email, validate_email(&form.email));
    let password_errors = if form.password.is_empty() {
        vec![FieldError::Required]
    } else {
        Vec::new()
    };
    result.set(Field::Password, password_errors);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "María Núñez".to_string(),
            email: "maria@example.com".to_string(),
            password: "Str0ng!Pass".to_string(),
            confirm_password: "Str0ng!Pass".to_string(),
            birth_date: "1995-02-01".to_string(),
            gender: "female".to_string(),
            interests: vec!["music".to_string(), "travel".to_string()],
            country: "Chile".to_string(),
        }
    }

    #[test]
    fn should_accept_complete_registration_form() {
        let result = validate_registration(&valid_form(), today(), &[]);
        assert!(result.is_valid(), "{:?}", result);
    }

    #[test]
    fn should_accept_accented_full_names() {
        assert!(validate_full_name("José Ángel Peña").is_empty());
    }

    #[test]
    fn should_reject_full_name_with_digits_or_symbols() {
        assert_eq!(validate_full_name("R2-D2"), vec![FieldError::Pattern]);
    }

    #[test]
    fn should_enforce_full_name_length_bounds() {
        assert_eq!(
            validate_full_name("A"),
            vec![FieldError::MinLength {
                required: 2,
                actual: 1
            }]
        );
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_full_name(&long_name),
            vec![FieldError::MaxLength {
                required: 100,
                actual: 101
            }]
        );
    }

    #[test]
    fn should_only_report_required_for_empty_inputs() {
        assert_eq!(validate_full_name(""), vec![FieldError::Required]);
        assert_eq!(validate_email(""), vec![FieldError::Required]);
        assert_eq!(validate_password(""), vec![FieldError::Required]);
        assert_eq!(validate_birth_date("", today()), vec![FieldError::Required]);
        assert_eq!(validate_interests(&[]), vec![FieldError::Required]);
    }

    #[test]
    fn should_validate_email_shape() {
        assert!(validate_email("first.last+tag@sub.example.org").is_empty());
        assert_eq!(validate_email("not-an-email"), vec![FieldError::Email]);
        assert_eq!(validate_email("a@b@c.com"), vec![FieldError::Email]);
        assert_eq!(validate_email("user@-example.com"), vec![FieldError::Email]);

        let long_local = format!("{}@example.com", "a".repeat(65));
        assert_eq!(validate_email(&long_local), vec![FieldError::Email]);
    }

    #[test]
    fn should_report_each_missing_password_requirement_separately() {
        assert_eq!(
            validate_password("abc"),
            vec![
                FieldError::MinLength {
                    required: 8,
                    actual: 3
                },
                FieldError::HasUppercase,
                FieldError::HasNumber,
                FieldError::HasSpecialChar,
            ]
        );
        assert_eq!(
            validate_password("ABCDEFG1!"),
            vec![FieldError::HasLowercase]
        );
        assert!(validate_password("Str0ng!Pass").is_empty());
    }

    #[test]
    fn should_score_password_strength_by_satisfied_rules() {
        assert_eq!(PasswordRequirements::of("").score(), 0);
        assert_eq!(PasswordStrength::of(""), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::of("a"), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::of("aA"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::of("aA1"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::of("aA1!"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::of("aA1!aaaa"), PasswordStrength::VeryStrong);
        assert_eq!(PasswordStrength::VeryStrong.label(), "Very strong");
    }

    #[test]
    fn should_only_reach_top_score_when_every_rule_holds() {
        for password in ["aaaaaaaa", "AAAAAAA1!", "aA1!", "aaaaAAAA1", "Aa!!!!!!!"] {
            assert!(PasswordRequirements::of(password).score() < 5, "{}", password);
        }
        assert_eq!(PasswordRequirements::of("Aa1!Aa1!").score(), 5);
    }

    #[test]
    fn should_flag_mismatch_on_field_and_form() {
        let form = RegistrationForm {
            confirm_password: "Different1!".to_string(),
            ..valid_form()
        };

        let result = validate_registration(&form, today(), &[]);

        assert!(!result.is_valid());
        assert_eq!(
            result.errors_for(Field::ConfirmPassword),
            &[FieldError::PasswordMismatch]
        );
        assert_eq!(result.form_errors(), &[FieldError::PasswordMismatch]);
    }

    #[test]
    fn should_revalidate_mismatch_against_current_password() {
        let mut form = RegistrationForm {
            password: "Changed1!x".to_string(),
            ..valid_form()
        };
        assert!(!validate_registration(&form, today(), &[]).is_valid());

        form.confirm_password = "Changed1!x".to_string();
        let result = validate_registration(&form, today(), &[]);

        assert!(result.is_valid());
        assert!(result.form_errors().is_empty());
    }

    #[test]
    fn should_flag_form_mismatch_when_confirmation_is_empty() {
        let form = RegistrationForm {
            confirm_password: String::new(),
            ..valid_form()
        };

        let result = validate_registration(&form, today(), &[]);

        assert_eq!(result.errors_for(Field::ConfirmPassword), &[FieldError::Required]);
        assert_eq!(result.form_errors(), &[FieldError::PasswordMismatch]);
    }

    #[test]
    fn should_admit_birth_date_exactly_eighteen_years_ago() {
        assert!(validate_birth_date("2006-06-15", today()).is_empty());
    }

    #[test]
    fn should_reject_birth_date_one_day_short_of_eighteen() {
        assert_eq!(
            validate_birth_date("2006-06-16", today()),
            vec![FieldError::MinimumAge {
                required_age: 18,
                actual_age: 17
            }]
        );
    }

    #[test]
    fn should_reject_unparseable_birth_date() {
        assert_eq!(
            validate_birth_date("15/06/2000", today()),
            vec![FieldError::InvalidDate]
        );
    }

    #[test]
    fn should_count_leap_day_birthdays_only_once_reached() {
        let birth = NaiveDate::from_ymd_opt(2004, 2, 29).unwrap();
        let before = NaiveDate::from_ymd_opt(2023, 2, 28).unwrap();
        let after = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        assert_eq!(age_on(birth, before), 18);
        assert_eq!(age_on(birth, after), 19);
    }

    #[test]
    fn should_reject_unknown_gender_and_interests() {
        assert_eq!(validate_gender("robot"), vec![FieldError::InvalidOption]);
        assert!(validate_gender("other").is_empty());
        assert_eq!(
            validate_interests(&["music".to_string(), "gardening".to_string()]),
            vec![FieldError::InvalidOption]
        );
    }

    #[test]
    fn should_check_country_against_loaded_list() {
        let known = vec![Country::new("4", "Chile", "CL")];
        assert!(validate_country("Chile", &known).is_empty());
        assert!(validate_country("Atlantis", &[]).is_empty());
        assert_eq!(
            validate_country("Atlantis", &known),
            vec![FieldError::InvalidOption]
        );
        assert_eq!(validate_country(" ", &known), vec![FieldError::Required]);
    }

    #[test]
    fn should_list_invalid_fields_in_order() {
        let form = RegistrationForm {
            full_name: String::new(),
            country: String::new(),
            ..valid_form()
        };

        let result = validate_registration(&form, today(), &[]);
        let fields: Vec<Field> = result.invalid_fields().map(|(f, _)| f).collect();

        assert_eq!(fields, vec![Field::FullName, Field::Country]);
    }

    #[test]
    fn should_not_apply_composition_rules_on_login() {
        let result = validate_login(&LoginForm {
            email: "maria@example.com".to_string(),
            password: "weak".to_string(),
        });
        assert!(result.is_valid());

        let result = validate_login(&LoginForm::default());
        assert_eq!(result.errors_for(Field::Email), &[FieldError::Required]);
        assert_eq!(result.errors_for(Field::Password), &[FieldError::Required]);
    }

    #[test]
    fn should_expose_error_kinds() {
        assert_eq!(FieldError::PasswordMismatch.kind(), "passwordMismatch");
        assert_eq!(
            FieldError::MinimumAge {
                required_age: 18,
                actual_age: 10
            }
            .kind(),
            "minimumAge"
        );
        assert_eq!(Field::ConfirmPassword.to_string(), "confirmPassword");
    }
}
