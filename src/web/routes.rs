//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::profile_page_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Profile page with links and counters
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(profile_page_handler))
}
