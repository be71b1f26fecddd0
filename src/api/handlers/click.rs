//! Handler for click recording.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::links::ClickResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_info::ClientInfo;
use crate::utils::link_id::parse_link_id;

/// Records a click on a link.
///
/// # Endpoint
///
/// `POST /api/links/{id}/click`
///
/// The client IP and user agent are taken from the request. Each call
/// stores one click; repeated clicks from the same client all count.
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Click recorded", "linkId": 3 }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` if `id` is not a positive integer
/// - `404 Not Found` (`{"error": "Link not found"}`) if no link has this id
pub async fn click_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    client: ClientInfo,
) -> Result<Json<ClickResponse>, AppError> {
    let link_id = parse_link_id(&raw_id)?;

    state
        .click_service
        .record_click(link_id, client.ip, client.user_agent)
        .await?;

    Ok(Json(ClickResponse {
        success: true,
        message: "Click recorded".to_string(),
        link_id,
    }))
}
