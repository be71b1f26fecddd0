//! Visitor recording middleware.
//!
//! Registers the caller as a visitor of the current UTC day before the
//! handler runs. Recording is best-effort: a storage failure is logged and
//! the request proceeds as if nothing happened.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::client_info::ClientInfo;

pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let client = ClientInfo::from_request_meta(req.headers(), req.extensions(), st.behind_proxy);

    match client.ip {
        Some(ip) => match st.visitor_service.add_visitor(&ip, &client.user_agent).await {
            Ok(outcome) if outcome.is_new => tracing::info!(ip = %ip, "New visitor today"),
            Ok(_) => {}
            Err(e) => tracing::warn!(ip = %ip, error = %e, "Failed to record visitor"),
        },
        None => tracing::debug!("Client IP unavailable, visitor not recorded"),
    }

    next.run(req).await
}
