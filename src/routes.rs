//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /`          - Profile page (server-rendered, HTML error page on failure)
//! - `/api/*`          - JSON API
//! - `/static/*`       - Static assets
//!
//! The page and every matched API route record a visitor.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured browser origins may call the API
//! - **Rate limiting** - Per-IP token bucket on the API (proxy-aware when configured)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, rate_limit, tracing, visitor};
use crate::state::AppState;
use crate::web;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Directory served under `/static`.
pub const STATIC_DIR: &str = "static";

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers;
///   `state.behind_proxy` also selects how the rate limiter keys clients
/// - `cors_origins` - browser origins allowed to call the API
pub fn app_router(state: AppState, cors_origins: &[String]) -> NormalizePath<Router> {
    let api_router = api::routes::api_routes(state.clone());
    let api_router = if state.behind_proxy {
        api_router.layer(rate_limit::proxy_layer())
    } else {
        api_router.layer(rate_limit::layer())
    };

    let page_router = web::routes::page_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        visitor::layer,
    ));

    let router = Router::new()
        .nest("/api", api_router)
        .merge(page_router)
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
