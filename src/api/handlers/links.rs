//! Handlers for reading links and their per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::links::{LinkItem, LinksResponse};
use crate::api::dto::stats::LinkStatsResponse;
use crate::domain::calendar::HISTORY_PERIOD;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::link_id::parse_link_id;

/// Lists active links in display order.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// {
///   "links": [
///     {
///       "id": 1,
///       "title": "Recipes",
///       "description": "My favourite dishes",
///       "url": "https://example.com/recipes",
///       "icon": "fas fa-utensils",
///       "order_index": 1,
///       "is_active": true
///     }
///   ]
/// }
/// ```
pub async fn links_handler(State(state): State<AppState>) -> Result<Json<LinksResponse>, AppError> {
    let links = state.link_service.list_active().await?;

    Ok(Json(LinksResponse {
        links: links.into_iter().map(LinkItem::from).collect(),
    }))
}

/// Returns a single link, active or not.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// - `400 Bad Request` if `id` is not a positive integer
/// - `404 Not Found` if no link has this id
pub async fn link_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<LinkItem>, AppError> {
    let id = parse_link_id(&raw_id)?;
    let link = state.link_service.get_by_id(id).await?;

    Ok(Json(link.into()))
}

/// Returns the daily click history of one link.
///
/// # Endpoint
///
/// `GET /api/links/{id}/stats`
///
/// # Errors
///
/// - `400 Bad Request` if `id` is not a positive integer
/// - `404 Not Found` if no link has this id
pub async fn link_stats_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<LinkStatsResponse>, AppError> {
    let id = parse_link_id(&raw_id)?;
    let link = state.link_service.get_by_id(id).await?;
    let history = state.click_service.click_stats(Some(link.id)).await?;

    Ok(Json(LinkStatsResponse {
        link_id: link.id,
        title: link.title,
        click_history: history.into_iter().map(Into::into).collect(),
        period: HISTORY_PERIOD.to_string(),
    }))
}
