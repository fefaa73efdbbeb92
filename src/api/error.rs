// src/api/error.rs — Mapping failures onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::ErrorResponse;
use crate::infra::errors::ScribeError;

pub const UNAVAILABLE_MESSAGE: &str = "Service is temporarily unavailable... Please try again later!";

#[derive(Debug)]
pub enum ApiError {
    /// Request was well-formed JSON but semantically invalid.
    Validation(String),
    /// The chat-completion service failed.
    Unavailable,
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_MESSAGE.into()),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".into(),
            ),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Log a pipeline failure and pick the response the client sees.
///
/// Upstream details stay in the log; clients only learn that the service
/// is unavailable.
pub fn translate_error(err: ScribeError) -> ApiError {
    if err.is_upstream() {
        tracing::warn!(error = %err, "chat completion failed");
        ApiError::Unavailable
    } else {
        tracing::error!(error = %err, "generation failed");
        ApiError::Internal
    }
}

impl From<ScribeError> for ApiError {
    fn from(err: ScribeError) -> Self {
        translate_error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_errors_are_unavailable() {
        let errors = [
            ScribeError::Provider {
                provider: "azure".into(),
                message: "boom".into(),
            },
            ScribeError::RateLimited {
                provider: "openai".into(),
            },
            ScribeError::Auth {
                provider: "azure".into(),
                message: "bad key".into(),
            },
        ];
        for err in errors {
            let response = translate_error(err).into_response();
            assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    #[test]
    fn test_other_errors_are_internal() {
        let response = translate_error(ScribeError::Config("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_is_422() {
        let response = ApiError::Validation("bad".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
