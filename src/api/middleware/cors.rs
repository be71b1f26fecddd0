//! Cross-origin resource sharing for browser clients.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer allowing the given origins.
///
/// Only `GET` and `POST` with a `Content-Type` header are allowed, which is
/// all the public page needs. Origins that are not valid header values are
/// skipped; [`crate::config::Config::validate`] rejects them at startup.
pub fn layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
