//! # API Errors
//!
//! Maps `PartselError` onto HTTP status codes with a `{"error": "..."}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use partsel_core::PartselError;
use serde::{Deserialize, Serialize};

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler error carrying the status it should be reported with.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

/// Status code for a core error.
pub fn status_for(error: &PartselError) -> StatusCode {
    match error {
        PartselError::InvalidRequirement { .. }
        | PartselError::UnknownFamily(_)
        | PartselError::InvalidComponent(_) => StatusCode::BAD_REQUEST,
        PartselError::NotFound(_) => StatusCode::NOT_FOUND,
        PartselError::DuplicatePartNumber(_) => StatusCode::CONFLICT,
        PartselError::SerializationError(_)
        | PartselError::DeserializationError(_)
        | PartselError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<PartselError> for ApiError {
    fn from(error: PartselError) -> Self {
        let status = status_for(&error);
        if status.is_server_error() {
            tracing::error!(error = %error, "Request failed");
        }
        Self {
            status,
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
