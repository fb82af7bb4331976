//! Error handling utilities for API responses.
//!
//! Every failed API call answers with a JSON body of the form
//! `{"error": "<message>"}` and the status fixed by the error kind:
//!
//! | `ServiceError`       | status |
//! |----------------------|--------|
//! | `Validation`         | 400    |
//! | `Unauthorized`       | 401    |
//! | `PermissionDenied`   | 403    |
//! | `NotFound`           | 404    |
//! | `InternalError`      | 500    |
//!
//! Storage details never reach the client. Services log the underlying error
//! and pick one of the fixed messages above.

use crate::errors::ServiceError;
use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Converts ServiceError to the HTTP status and JSON body sent to the client.
pub fn service_error_to_http(error: ServiceError) -> ApiError {
    let (status, message) = match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
        ServiceError::PermissionDenied { message } => (StatusCode::FORBIDDEN, message),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::InternalError { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
    };

    (status, Json(ErrorResponse::new(message)))
}

/// Maps a body that failed to parse as JSON to a `Validation` error.
pub fn json_rejection_to_service_error(rejection: JsonRejection) -> ServiceError {
    tracing::error!("Rejected request body: {}", rejection.body_text());
    ServiceError::validation(rejection.body_text())
}
