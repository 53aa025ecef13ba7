//! Wire shapes shared by the server, the auth routes, and the client.

use serde::{Deserialize, Serialize};

use crate::validation::{FieldError, ValidationErrors};

/// JSON body of every error response: `{"error": "...", "details": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Error body carrying per-field validation details.
    pub fn with_details(error: impl Into<String>, errors: ValidationErrors) -> Self {
        Self {
            error: error.into(),
            details: Some(errors.into_errors()),
        }
    }
}

/// `{"success": true, "message": "..."}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
}

impl MessageBody {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// `{"success": true}` acknowledgement with no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessBody {
    pub success: bool,
}

impl SuccessBody {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
