use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::{deserialize_optional_string, deserialize_trimmed_string};
use crate::validation::ValidationErrors;

use super::{RequestStatus, SupportRequest};

const SUBJECT_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 5000;

/// Payload for `POST /api/requests`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub subject: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub attachment_url: Option<String>,
}

impl SendRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if errors.required("subject", "Subject", &self.subject) {
            errors.max_len("subject", "Subject", &self.subject, SUBJECT_MAX);
        }
        if errors.required("description", "Description", &self.description) {
            errors.max_len("description", "Description", &self.description, DESCRIPTION_MAX);
        }
        errors.optional_url("attachmentUrl", self.attachment_url.as_deref());
        errors.into_result()
    }

    /// New requests always start out pending.
    pub fn into_support_request(self, user_id: Uuid) -> SupportRequest {
        let now = Utc::now();
        SupportRequest {
            id: Uuid::new_v4(),
            user_id,
            subject: self.subject,
            description: self.description,
            attachment_url: self.attachment_url,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}
