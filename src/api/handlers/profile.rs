//! Handler for the profile endpoint.

use axum::{Json, extract::State};

use crate::domain::entities::Profile;
use crate::state::AppState;

/// Returns the page owner's profile.
///
/// # Endpoint
///
/// `GET /api/profile`
///
/// The profile is static and loaded once at startup; this handler never fails.
pub async fn profile_handler(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile_service.profile().clone())
}
