//! Client error types.

use logistix_core::api::ErrorBody;
use logistix_core::validation::FieldError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError {
        status: u16,
        message: String,
        details: Vec<FieldError>,
    },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Builds the error for a non-success response from its status and body.
    ///
    /// Bodies in the `{"error", "details"}` shape are decoded; anything else
    /// is reported verbatim.
    pub fn from_response(status: u16, body: &str) -> Self {
        let (message, details) = match serde_json::from_str::<ErrorBody>(body) {
            Ok(body) => (body.error, body.details.unwrap_or_default()),
            Err(_) if body.trim().is_empty() => ("Unknown error".to_string(), Vec::new()),
            Err(_) => (body.trim().to_string(), Vec::new()),
        };

        if status == 404 {
            Self::NotFound { message }
        } else {
            Self::ServerError {
                status,
                message,
                details,
            }
        }
    }

    /// Field-level validation messages, if the server sent any.
    pub fn details(&self) -> &[FieldError] {
        match self {
            Self::ServerError { details, .. } => details,
            _ => &[],
        }
    }
}
