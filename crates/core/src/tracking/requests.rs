use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_optional_string, deserialize_trimmed_string};
use crate::validation::ValidationErrors;

/// Canonical form of a tracking number used for lookups.
///
/// ```
/// use logistix_core::tracking::normalize_tracking_number;
///
/// assert_eq!(normalize_tracking_number("  ulx123456789 "), "ULX123456789");
/// ```
pub fn normalize_tracking_number(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Payload for `POST /api/tracking`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub tracking_number: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_type: Option<String>,
}

impl TrackingRequest {
    pub fn new(tracking_number: impl Into<String>) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            service_type: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("trackingNumber", "Tracking number", &self.tracking_number);
        errors.into_result()
    }

    /// The tracking number in lookup form.
    pub fn normalized(&self) -> String {
        normalize_tracking_number(&self.tracking_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tracking_number_is_a_field_error() {
        let request: TrackingRequest = serde_json::from_str("{}").unwrap();

        let errors = request.validate().unwrap_err();

        assert_eq!(errors.errors()[0].field, "trackingNumber");
        assert_eq!(errors.errors()[0].message, "Tracking number is required");
    }

    #[test]
    fn test_tracking_number_is_trimmed_and_normalized() {
        let request: TrackingRequest =
            serde_json::from_str(r#"{"trackingNumber":" ulx123456789 ","serviceType":""}"#)
                .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.service_type, None);
        assert_eq!(request.normalized(), "ULX123456789");
    }

    #[test]
    fn test_any_non_blank_number_is_accepted() {
        for raw in ["ULX 123", "ulx/42;x", &"X".repeat(65)] {
            assert!(TrackingRequest::new(raw).validate().is_ok(), "{raw}");
        }
    }
}
