//! Request payloads for the public enquiry forms.
//!
//! Each payload validates itself and converts into its stored record.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::{deserialize_optional_string, deserialize_trimmed_string};
use crate::validation::ValidationErrors;

use super::{Contact, Quote, QuoteLead};

const NAME_MAX: usize = 100;
const MESSAGE_MAX: usize = 5000;

fn validate_name(errors: &mut ValidationErrors, name: &str) {
    if errors.required("name", "Name", name) {
        errors.max_len("name", "Name", name, NAME_MAX);
    }
}

/// Payload for `POST /api/contact`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub service_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_name(&mut errors, &self.name);
        errors.email("email", &self.email);
        if errors.required("message", "Message", &self.message) {
            errors.max_len("message", "Message", &self.message, MESSAGE_MAX);
        }
        errors.into_result()
    }

    pub fn into_contact(self) -> Contact {
        Contact {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            service_type: self.service_type,
            message: self.message,
            created_at: Utc::now(),
        }
    }
}

/// Payload for `POST /api/quote`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub service_type: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub origin: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub destination: String,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub dimensions: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub requirements: Option<String>,
}

impl QuoteRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_name(&mut errors, &self.name);
        errors.email("email", &self.email);
        errors.required("serviceType", "Service type", &self.service_type);
        errors.required("origin", "Origin", &self.origin);
        errors.required("destination", "Destination", &self.destination);
        errors.positive("weight", "Weight", self.weight);
        if let Some(requirements) = &self.requirements {
            errors.max_len("requirements", "Requirements", requirements, MESSAGE_MAX);
        }
        errors.into_result()
    }

    pub fn into_quote(self) -> Quote {
        Quote {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            service_type: self.service_type,
            origin: self.origin,
            destination: self.destination,
            weight: self.weight,
            dimensions: self.dimensions,
            requirements: self.requirements,
            created_at: Utc::now(),
        }
    }
}

/// Payload for `POST /api/get-quote`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLeadRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub contact_number: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub company_name: Option<String>,
}

impl QuoteLeadRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_name(&mut errors, &self.name);
        errors.required("contactNumber", "Contact number", &self.contact_number);
        errors.email("email", &self.email);
        errors.into_result()
    }

    pub fn into_lead(self) -> QuoteLead {
        QuoteLead {
            id: Uuid::new_v4(),
            name: self.name,
            contact_number: self.contact_number,
            email: self.email,
            company_name: self.company_name,
            created_at: Utc::now(),
        }
    }
}

/// Payload for `POST /api/newsletter`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub email: String,
}

impl NewsletterRequest {
    /// True when no address was supplied at all.
    pub fn is_blank(&self) -> bool {
        self.email.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.email("email", &self.email);
        errors.into_result()
    }

    /// Subscriptions are keyed by the lowercased address.
    pub fn normalized_email(&self) -> String {
        crate::auth::normalize_email(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_blank_optionals_become_none() {
        let request: ContactRequest = serde_json::from_str(
            r#"{"name":"Lena","email":"lena@example.com","phone":"  ","serviceType":"","message":"Need a pallet moved"}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        let contact = request.into_contact();
        assert_eq!(contact.phone, None);
        assert_eq!(contact.service_type, None);
        assert_eq!(contact.message, "Need a pallet moved");
    }

    #[test]
    fn test_contact_reports_all_errors() {
        let request: ContactRequest = serde_json::from_str(r#"{"email":"nope"}"#).unwrap();

        let errors = request.validate().unwrap_err();

        assert_eq!(errors.errors().len(), 3);
        assert!(errors.has_field("name"));
        assert!(errors.has_field("email"));
        assert!(errors.has_field("message"));
    }

    #[test]
    fn test_quote_requires_route_and_service() {
        let request = QuoteRequest {
            name: "Lena".to_string(),
            email: "lena@example.com".to_string(),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();

        assert!(errors.has_field("serviceType"));
        assert!(errors.has_field("origin"));
        assert!(errors.has_field("destination"));
        assert!(!errors.has_field("weight"));
    }

    #[test]
    fn test_quote_weight_must_be_positive() {
        let request = QuoteRequest {
            name: "Lena".to_string(),
            email: "lena@example.com".to_string(),
            service_type: "Ocean Freight".to_string(),
            origin: "Rotterdam".to_string(),
            destination: "Lagos".to_string(),
            weight: Some(0),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.errors()[0].message, "Weight must be greater than zero");
    }

    #[test]
    fn test_quote_lead_conversion() {
        let request: QuoteLeadRequest = serde_json::from_str(
            r#"{"name":"Lena","contactNumber":"+31 10 123 4567","email":"lena@example.com"}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        let lead = request.into_lead();
        assert_eq!(lead.contact_number, "+31 10 123 4567");
        assert_eq!(lead.company_name, None);
    }

    #[test]
    fn test_newsletter_blank_and_invalid() {
        let blank: NewsletterRequest = serde_json::from_str(r#"{"email":"  "}"#).unwrap();
        assert!(blank.is_blank());

        let missing: NewsletterRequest = serde_json::from_str("{}").unwrap();
        assert!(missing.is_blank());

        let invalid = NewsletterRequest {
            email: "not-an-email".to_string(),
        };
        assert!(!invalid.is_blank());
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_newsletter_normalizes_email() {
        let request = NewsletterRequest {
            email: "News@Example.COM".to_string(),
        };

        assert_eq!(request.normalized_email(), "news@example.com");
    }
}
