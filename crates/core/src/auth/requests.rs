//! Request payloads for account operations.
//!
//! Required strings deserialize with `#[serde(default)]` so that a missing
//! field surfaces as a field-level validation error rather than a parse error.

use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_optional_string, deserialize_trimmed_string};
use crate::validation::ValidationErrors;

use super::User;

const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 128;
const NAME_MAX: usize = 100;

fn validate_profile_fields(
    errors: &mut ValidationErrors,
    first_name: &str,
    company_name: &str,
    phone_number: &str,
) {
    if errors.required("firstName", "First name", first_name) {
        errors.max_len("firstName", "First name", first_name, NAME_MAX);
    }
    if errors.required("companyName", "Company name", company_name) {
        errors.max_len("companyName", "Company name", company_name, NAME_MAX);
    }
    if errors.required("phoneNumber", "Phone number", phone_number) {
        let digits = phone_number.chars().filter(char::is_ascii_digit).count();
        if digits < 7 {
            errors.add("phoneNumber", "Phone number must contain at least 7 digits");
        }
    }
}

fn validate_new_password(errors: &mut ValidationErrors, field: &str, password: &str) {
    if errors.required(field, "Password", password) {
        errors.min_len(field, "Password", password, PASSWORD_MIN);
        errors.max_len(field, "Password", password, PASSWORD_MAX);
    }
}

/// Payload for `POST /api/auth/signup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub company_name: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub ein_business_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub email: String,
    /// Not trimmed: whitespace is a legitimate password character.
    #[serde(default)]
    pub password: String,
    /// Human-check token from the sign-up form. Accepted and not verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recaptcha: Option<String>,
}

impl SignUpRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_profile_fields(
            &mut errors,
            &self.first_name,
            &self.company_name,
            &self.phone_number,
        );
        errors.email("email", &self.email);
        validate_new_password(&mut errors, "password", &self.password);
        errors.into_result()
    }

    /// Builds the account record once the password has been hashed.
    pub fn into_user(self, password_hash: String) -> User {
        User::new(
            self.email,
            password_hash,
            self.first_name,
            self.company_name,
            self.phone_number,
        )
        .with_ein_business_number(self.ein_business_number)
    }
}

/// Payload for `POST /api/auth/signin`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recaptcha: Option<String>,
}

impl SignInRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("email", "Email", &self.email);
        errors.required("password", "Password", &self.password);
        errors.into_result()
    }
}

/// Payload for `PUT /api/profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub company_name: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub ein_business_number: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_profile_fields(
            &mut errors,
            &self.first_name,
            &self.company_name,
            &self.phone_number,
        );
        errors.into_result()
    }

    /// Apply updates to an existing account, bumping `updated_at`.
    pub fn apply_to(self, user: &mut User) {
        user.first_name = self.first_name;
        user.company_name = self.company_name;
        user.phone_number = self.phone_number;
        user.ein_business_number = self.ein_business_number;
        user.updated_at = chrono::Utc::now();
    }
}

/// Payload for `POST /api/auth/change-password`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl ChangePasswordRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("currentPassword", "Current password", &self.current_password);
        validate_new_password(&mut errors, "newPassword", &self.new_password);
        if errors.required("confirmPassword", "Password confirmation", &self.confirm_password)
            && self.confirm_password != self.new_password
        {
            errors.add("confirmPassword", "Passwords don't match");
        }
        errors.into_result()
    }
}
