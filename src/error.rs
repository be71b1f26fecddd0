//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service layer returns [`AppError`]. The
//! HTTP representation is:
//!
//! - `400` `{"error": "...", "details": {...}}` for [`AppError::Validation`]
//! - `404` `{"error": "..."}` for [`AppError::NotFound`]
//! - `500` `{"error": "Internal server error"}` for [`AppError::Internal`]
//!
//! Internal error detail never reaches the body directly. It travels in an
//! [`InternalErrorDetail`] response extension and is attached by
//! [`crate::api::middleware::error_detail`] only in development mode.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Generic message returned to callers for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Detail of an internal failure, kept out of the response body.
#[derive(Debug, Clone)]
pub struct InternalErrorDetail(pub String);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation { message, details } => (
                status,
                Json(ErrorBody {
                    error: message,
                    details: Some(details),
                }),
            )
                .into_response(),
            AppError::NotFound { message } => (
                status,
                Json(ErrorBody {
                    error: message,
                    details: None,
                }),
            )
                .into_response(),
            AppError::Internal { message } => {
                let mut response = (
                    status,
                    Json(ErrorBody {
                        error: INTERNAL_ERROR_MESSAGE.to_string(),
                        details: None,
                    }),
                )
                    .into_response();
                response
                    .extensions_mut()
                    .insert(InternalErrorDetail(message));
                response
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!(e.field_errors()))
    }
}
