//! DTO for the API index.

use serde::Serialize;

/// Response for `GET /api`: service name, version and endpoint map.
#[derive(Debug, Serialize)]
pub struct ApiIndexResponse {
    pub message: String,
    pub version: String,
    pub endpoints: ApiEndpoints,
}

/// Public endpoint paths.
#[derive(Debug, Serialize)]
pub struct ApiEndpoints {
    pub health: &'static str,
    pub profile: &'static str,
    pub links: &'static str,
    pub click: &'static str,
    pub stats: &'static str,
    pub stats_detailed: &'static str,
}
