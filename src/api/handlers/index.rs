//! Handler for the API index.

use axum::Json;

use crate::api::dto::index::{ApiEndpoints, ApiIndexResponse};

/// Describes the public API.
///
/// # Endpoint
///
/// `GET /api`
pub async fn api_index_handler() -> Json<ApiIndexResponse> {
    Json(ApiIndexResponse {
        message: "Link-in-bio API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ApiEndpoints {
            health: "/api/health",
            profile: "/api/profile",
            links: "/api/links",
            click: "/api/links/{id}/click",
            stats: "/api/stats",
            stats_detailed: "/api/stats/detailed",
        },
    })
}
