//! Handlers for aggregate statistics.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::stats::{DetailedStatsQuery, DetailedStatsResponse, StatsSummaryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the headline counters.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "total_links": 4,
///   "total_clicks": 120,
///   "visitors_today": 7,
///   "clicks_today": 12,
///   "updated_at": "2025-01-15T10:30:00Z"
/// }
/// ```
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsSummaryResponse>, AppError> {
    let summary = state.stats_service.summary().await?;

    Ok(Json(summary.into()))
}

/// Returns visitor counters, the most clicked links and daily click history.
///
/// # Endpoint
///
/// `GET /api/stats/detailed`
///
/// # Query Parameters
///
/// - `limit` (optional): number of top links, 1 to 50 (default: 5)
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is out of range.
pub async fn detailed_stats_handler(
    State(state): State<AppState>,
    Query(params): Query<DetailedStatsQuery>,
) -> Result<Json<DetailedStatsResponse>, AppError> {
    params.validate()?;

    let detailed = state
        .stats_service
        .detailed(params.limit.map(i64::from))
        .await?;

    Ok(Json(detailed.into()))
}
