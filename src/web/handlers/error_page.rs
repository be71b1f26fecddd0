//! Error page for server-rendered routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

const UNAVAILABLE_MESSAGE: &str = "This page is temporarily unavailable. Please try again later.";

/// Template for `templates/error.html`.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorPageTemplate {
    pub status: u16,
    pub message: String,
}

/// Failure of a page handler, rendered as HTML instead of the API's JSON body.
///
/// Internal detail is logged and never shown to the browser.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = match self.0 {
            AppError::Internal { message } => {
                tracing::error!(error = %message, "Page rendering failed");
                UNAVAILABLE_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        let page = ErrorPageTemplate {
            status: status.as_u16(),
            message,
        };
        (status, page).into_response()
    }
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        self.0.status()
    }
}
