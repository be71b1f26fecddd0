//! API route configuration.
//!
//! Every matched API route records the caller as a visitor via
//! [`crate::api::middleware::visitor`] before its handler runs.

use crate::api::handlers::{
    api_index_handler, click_handler, detailed_stats_handler, health_handler, link_handler,
    link_stats_handler, links_handler, profile_handler, stats_handler,
};
use crate::api::middleware::{error_detail, visitor};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// All API routes, to be nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /`                 - API index
/// - `GET  /health`           - Health check
/// - `GET  /profile`          - Page owner's profile
/// - `GET  /links`            - Active links in display order
/// - `GET  /links/{id}`       - Single link
/// - `GET  /links/{id}/stats` - Daily click history of a link
/// - `POST /links/{id}/click` - Record a click
/// - `GET  /stats`            - Summary counters
/// - `GET  /stats/detailed`   - Visitors, top links and click history
///
/// Visitor recording runs as a route layer so unmatched paths are not
/// counted. Internal error detail is logged and, in development, exposed
/// by [`error_detail`].
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(api_index_handler))
        .route("/health", get(health_handler))
        .route("/profile", get(profile_handler))
        .route("/links", get(links_handler))
        .route("/links/{id}", get(link_handler))
        .route("/links/{id}/stats", get(link_stats_handler))
        .route("/links/{id}/click", post(click_handler))
        .route("/stats", get(stats_handler))
        .route("/stats/detailed", get(detailed_stats_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), visitor::layer))
        .layer(middleware::from_fn_with_state(state, error_detail::layer))
}
