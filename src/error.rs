use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::*;
use crate::models::ErrorBody;

/// Submission rejected before anything is forwarded. HTTP 400.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("amount is not a valid number")]
    InvalidAmount,
}

impl ValidationError {
    pub fn public_message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields(_) => ERR_MISSING_FIELDS,
            ValidationError::InvalidAmount => ERR_INVALID_AMOUNT,
        }
    }
}

/// Anything that goes wrong while handing a record to the storage service.
///
/// The variants only matter for the logs: callers always see the same
/// generic message and a 500.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("storage endpoint is not configured")]
    NotConfigured,
    #[error("request body is not valid JSON: {0}")]
    MalformedRequest(#[source] serde_json::Error),
    #[error("storage service unreachable: {0}")]
    Network(#[from] reqwest::Error),
    #[error("storage service answered with status {0}")]
    UpstreamStatus(u16),
    #[error("storage service reply is not valid JSON: {0}")]
    UpstreamBody(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Validation(e) => e.public_message(),
            ApiError::Relay(_) => ERR_PROCESSING,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(e) => tracing::warn!(error = %e, "submission rejected"),
            ApiError::Relay(e) => tracing::error!(error = %e, "submission relay failed"),
        }
        let body = ErrorBody::new(self.public_message());
        (self.status_code(), Json(body)).into_response()
    }
}
