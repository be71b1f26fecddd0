#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::{Router, extract::ConnectInfo};
use axum_test::TestServer;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use linkbio::api::routes::api_routes;
use linkbio::application::services::ProfileService;
use linkbio::domain::calendar::FixedClock;
use linkbio::routes::app_router;
use linkbio::state::AppState;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::{Layer, ServiceExt};

/// Peer address seen by handlers when no proxy header is sent.
pub const PEER_IP: &str = "127.0.0.1";

/// Instant every test request happens at.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

pub fn today() -> NaiveDate {
    now().date_naive()
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - chrono::Duration::days(days)
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        Arc::new(FixedClock(now())),
        ProfileService::new(Default::default()),
    )
    .with_behind_proxy(true)
    .with_error_details(true)
}

/// API router nested under `/api` with a fake peer address.
pub fn api_server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest("/api", api_routes(state.clone()))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    TestServer::new(app).unwrap()
}

pub async fn create_test_link(pool: &PgPool, title: &str, order_index: i32, is_active: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (title, url, order_index, is_active) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(title)
    .bind(format!("https://example.com/{}", title.to_lowercase()))
    .bind(order_index)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_click(pool: &PgPool, link_id: i64, ip: &str, date: NaiveDate) {
    sqlx::query(
        "INSERT INTO clicks (link_id, ip_address, user_agent, clicked_at, date) VALUES ($1, $2, 'test', $3, $4)",
    )
    .bind(link_id)
    .bind(ip)
    .bind(date.and_hms_opt(10, 0, 0).unwrap().and_utc())
    .bind(date)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_visitor(pool: &PgPool, ip: &str, date: NaiveDate) {
    sqlx::query("INSERT INTO visitors (ip_address, user_agent, date) VALUES ($1, 'test', $2)")
        .bind(ip)
        .bind(date)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Sends one request through the full application router, middleware included.
pub async fn send_to_app(state: AppState, request: Request<Body>) -> Response {
    MockConnectInfoLayer
        .layer(app_router(state, &[]))
        .oneshot(request)
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = format!("{PEER_IP}:12345").parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
