use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed rule, keyed by the wire (camelCase) field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered collection of field errors for one payload.
///
/// Rules append to the collection and never short-circuit, so a client gets
/// every problem with a submission in a single response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed: {}", summary(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection holding a single error.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Returns true when at least one error concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Requires a non-blank value.
    pub fn required(&mut self, field: &str, label: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.add(field, format!("{label} is required"));
            return false;
        }
        true
    }

    /// Requires a non-blank, well-formed email address.
    pub fn email(&mut self, field: &str, value: &str) {
        if !self.required(field, "Email", value) {
            return;
        }
        if !super::is_valid_email(value) {
            self.add(field, "Invalid email address");
        }
    }

    /// Requires at least `min` characters. Blank values are left to `required`.
    pub fn min_len(&mut self, field: &str, label: &str, value: &str, min: usize) {
        if !value.is_empty() && value.chars().count() < min {
            self.add(field, format!("{label} must be at least {min} characters"));
        }
    }

    pub fn max_len(&mut self, field: &str, label: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("{label} must be at most {max} characters"));
        }
    }

    /// Requires an absolute http(s) URL when a value is present.
    pub fn optional_url(&mut self, field: &str, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        match url::Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => self.add(field, "Must be a valid http(s) URL"),
        }
    }

    /// Requires a strictly positive number when a value is present.
    pub fn positive(&mut self, field: &str, label: &str, value: Option<i64>) {
        if let Some(v) = value {
            if v <= 0 {
                self.add(field, format!("{label} must be greater than zero"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_is_ok() {
        assert_eq!(ValidationErrors::new().into_result(), Ok(()));
    }

    #[test]
    fn test_required_reports_blank_values() {
        let mut errors = ValidationErrors::new();
        assert!(!errors.required("firstName", "First name", "   "));
        assert!(errors.required("companyName", "Company name", "Acme"));

        assert_eq!(
            errors.errors(),
            &[FieldError::new("firstName", "First name is required")]
        );
    }

    #[test]
    fn test_email_reports_missing_before_format() {
        let mut errors = ValidationErrors::new();
        errors.email("email", "");
        assert_eq!(errors.errors()[0].message, "Email is required");

        let mut errors = ValidationErrors::new();
        errors.email("email", "not-an-email");
        assert_eq!(errors.errors()[0].message, "Invalid email address");
    }

    #[test]
    fn test_length_rules_count_characters() {
        let mut errors = ValidationErrors::new();
        errors.min_len("password", "Password", "short", 8);
        errors.max_len("subject", "Subject", "ééé", 3);

        assert_eq!(errors.errors().len(), 1);
        assert!(errors.has_field("password"));
    }

    #[test]
    fn test_min_len_ignores_blank_values() {
        let mut errors = ValidationErrors::new();
        errors.min_len("password", "Password", "", 8);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_optional_url() {
        let mut errors = ValidationErrors::new();
        errors.optional_url("attachmentUrl", None);
        errors.optional_url("attachmentUrl", Some("https://files.example.com/bl.pdf"));
        assert!(errors.is_empty());

        errors.optional_url("attachmentUrl", Some("ftp://files.example.com/bl.pdf"));
        errors.optional_url("attachmentUrl", Some("not a url"));
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn test_positive() {
        let mut errors = ValidationErrors::new();
        errors.positive("weight", "Weight", Some(12));
        errors.positive("weight", "Weight", None);
        assert!(errors.is_empty());

        errors.positive("weight", "Weight", Some(0));
        assert_eq!(errors.errors()[0].message, "Weight must be greater than zero");
    }

    #[test]
    fn test_display_lists_every_field() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Email is required");
        errors.add("password", "Password is required");

        assert_eq!(
            errors.to_string(),
            "validation failed: email: Email is required, password: Password is required"
        );
    }
}
