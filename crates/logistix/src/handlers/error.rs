use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use logistix_core::api::ErrorBody;
use logistix_core::portal::RecordFilterError;
use logistix_core::storage::RepositoryError;
use logistix_core::validation::ValidationErrors;
use thiserror::Error;

/// Errors returned by the `/api` handlers. Every variant renders as [`ErrorBody`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed JSON body or query string.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Field-level validation failure, reported under `message`.
    #[error("{message}")]
    Validation {
        message: &'static str,
        errors: ValidationErrors,
    },

    #[error("{0}")]
    BadRequest(&'static str),

    #[error(transparent)]
    Filter(#[from] RecordFilterError),

    #[error("{0}")]
    NotFound(&'static str),

    /// Storage failure, reported to the client as `context`.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        source: RepositoryError,
    },
}

impl ApiError {
    /// Builds a mapper that wraps a repository error with the endpoint's message.
    pub fn storage(context: &'static str) -> impl FnOnce(RepositoryError) -> ApiError {
        move |source| ApiError::Storage { context, source }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation {
            message: "Invalid input",
            errors,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidInput(reason) => {
                tracing::debug!(%reason, "Rejected malformed request");
                (StatusCode::BAD_REQUEST, ErrorBody::new("Invalid input"))
            }
            ApiError::Validation { message, errors } => {
                (StatusCode::BAD_REQUEST, ErrorBody::with_details(message, errors))
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, ErrorBody::new(message)),
            ApiError::Filter(err) => {
                let errors = ValidationErrors::single(err.field(), err.to_string());
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody::with_details("Invalid input", errors),
                )
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorBody::new(message)),
            ApiError::Storage { context, source } => {
                tracing::error!(error = %source, record = %source.record(), "{context}");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(context))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejection is `400 {"error":"Invalid input"}`.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejection is `400 {"error":"Invalid input"}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use logistix_core::storage::Record;

    async fn body_of(err: ApiError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_uses_message_and_details() {
        let err = ApiError::Validation {
            message: "Invalid tracking number",
            errors: ValidationErrors::single("trackingNumber", "Tracking number is required"),
        };

        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid tracking number");
        assert_eq!(body.details.unwrap()[0].field, "trackingNumber");
    }

    #[tokio::test]
    async fn test_filter_error_points_at_field() {
        let (status, body) = body_of(RecordFilterError::InvalidDateRange.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid input");
        assert_eq!(body.details.unwrap()[0].field, "fromDate");
    }

    #[tokio::test]
    async fn test_storage_error_hides_cause() {
        let err = ApiError::storage("Failed to submit contact form")(RepositoryError::duplicate(
            Record::Contact,
            "0b9f6a2e",
        ));

        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, ErrorBody::new("Failed to submit contact form"));
    }

    #[tokio::test]
    async fn test_every_storage_failure_is_500() {
        for source in [
            RepositoryError::duplicate(Record::SupportRequest, "req-1"),
            RepositoryError::missing(Record::Job, "job-1"),
        ] {
            let (status, body) = body_of(ApiError::storage("Failed to load jobs")(source)).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.error, "Failed to load jobs");
        }
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) = body_of(ApiError::NotFound("Shipment not found")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Shipment not found");
    }
}
