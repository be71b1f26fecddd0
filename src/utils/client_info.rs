//! Caller identification from HTTP request metadata.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{Extensions, HeaderMap, header, request::Parts};
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::state::AppState;

/// Resolves the client IP address of a request.
///
/// With `behind_proxy`, the first entry of `X-Forwarded-For` wins, then
/// `X-Real-IP`. The socket peer address is the fallback, and the only source
/// when the service is not behind a trusted proxy.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
///
/// let ip = resolve_client_ip(&headers, None, true);
/// assert_eq!(ip.as_deref(), Some("203.0.113.7"));
/// ```
pub fn resolve_client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    behind_proxy: bool,
) -> Option<String> {
    if behind_proxy {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let real_ip = || {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        if let Some(ip) = forwarded.or_else(real_ip) {
            return Some(ip.to_string());
        }
    }

    peer.map(|addr| addr.ip().to_string())
}

/// Extracts the `User-Agent` header, empty when absent or not valid UTF-8.
pub fn user_agent(headers: &HeaderMap) -> String {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Client IP address and user agent of the current request.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientInfo {
    pub ip: Option<String>,
    pub user_agent: String,
}

impl ClientInfo {
    /// Builds client information from request headers and extensions.
    ///
    /// The peer address comes from the `ConnectInfo<SocketAddr>` extension
    /// installed by `into_make_service_with_connect_info`.
    pub fn from_request_meta(
        headers: &HeaderMap,
        extensions: &Extensions,
        behind_proxy: bool,
    ) -> Self {
        let peer = extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Self {
            ip: resolve_client_ip(headers, peer, behind_proxy),
            user_agent: user_agent(headers),
        }
    }
}

impl FromRequestParts<AppState> for ClientInfo {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_request_meta(
            &parts.headers,
            &parts.extensions,
            state.behind_proxy,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("192.0.2.10:54321".parse().unwrap())
    }

    #[test]
    fn test_peer_address_when_not_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7"));

        let ip = resolve_client_ip(&headers, peer(), false);
        assert_eq!(ip.as_deref(), Some("192.0.2.10"));
    }

    #[test]
    fn test_forwarded_for_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );

        let ip = resolve_client_ip(&headers, peer(), true);
        assert_eq!(ip.as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn test_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));

        let ip = resolve_client_ip(&headers, peer(), true);
        assert_eq!(ip.as_deref(), Some("198.51.100.4"));
    }

    #[test]
    fn test_proxy_without_headers_uses_peer() {
        let ip = resolve_client_ip(&HeaderMap::new(), peer(), true);
        assert_eq!(ip.as_deref(), Some("192.0.2.10"));
    }

    #[test]
    fn test_no_source_at_all() {
        assert!(resolve_client_ip(&HeaderMap::new(), None, false).is_none());
    }

    #[test]
    fn test_user_agent() {
        let mut headers = HeaderMap::new();
        assert_eq!(user_agent(&headers), "");

        headers.insert(header::USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
        assert_eq!(user_agent(&headers), "Mozilla/5.0");
    }
}
