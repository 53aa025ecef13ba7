use std::fmt::Display;

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use logistix_core::api::ErrorBody;
use logistix_core::validation::ValidationErrors;
use thiserror::Error;

/// Auth errors for the logistix_auth crate.
///
/// This wraps the core `AuthError` and adds the failures that only arise
/// at the HTTP boundary: credentials, malformed bodies, and hashing.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the session store or expiry arithmetic.
    #[error(transparent)]
    Core(#[from] logistix_core::auth::AuthError),

    /// The request body was not valid JSON for the expected payload.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("User already exists with this email")]
    EmailTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Current password is incorrect")]
    IncorrectPassword,

    /// Rejection from [`crate::CurrentUser`].
    #[error("Unauthorized")]
    Unauthorized,

    /// `GET /api/auth/user` without a session.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Argon2 failure.
    #[error("password hashing error: {0}")]
    Password(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// A storage or hashing failure, reported to the client as `context`.
    #[error("{context}: {cause}")]
    Internal { context: &'static str, cause: String },
}

impl AuthError {
    /// Builds a mapper that turns any error into [`AuthError::Internal`].
    pub fn internal<E: Display>(context: &'static str) -> impl FnOnce(E) -> AuthError {
        move |err| AuthError::Internal {
            context,
            cause: err.to_string(),
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AuthError::InvalidInput(reason) => {
                tracing::debug!(%reason, "Rejected malformed auth payload");
                (StatusCode::BAD_REQUEST, ErrorBody::new("Invalid input"))
            }
            AuthError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::with_details("Invalid input", errors),
            ),
            AuthError::EmailTaken | AuthError::IncorrectPassword => {
                (StatusCode::BAD_REQUEST, ErrorBody::new(self.to_string()))
            }
            AuthError::InvalidCredentials
            | AuthError::Unauthorized
            | AuthError::NotAuthenticated => {
                (StatusCode::UNAUTHORIZED, ErrorBody::new(self.to_string()))
            }
            AuthError::Internal { context, ref cause } => {
                tracing::error!(%cause, "{context}");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(context))
            }
            AuthError::Core(_) | AuthError::Password(_) | AuthError::Config(_) => {
                tracing::error!("Auth error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejection is `400 {"error":"Invalid input"}`.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AuthError))]
pub struct AuthJson<T>(pub T);
