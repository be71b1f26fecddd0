//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, state wiring and the Axum
//! server lifecycle.

use crate::application::services::ProfileService;
use crate::config::Config;
use crate::domain::calendar::SystemClock;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Creates the PostgreSQL connection pool from configuration.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Applies pending schema migrations. Already-applied migrations are skipped.
///
/// # Errors
///
/// Returns an error if a migration fails or the recorded history does not
/// match the embedded migrations.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Profile (from file or built-in)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The profile file cannot be read
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    migrate(&pool).await?;
    tracing::info!("Migrations applied");

    let profile_service = ProfileService::load(config.profile_file.as_deref())?;

    let state = AppState::new(Arc::new(pool), Arc::new(SystemClock), profile_service)
        .with_behind_proxy(config.behind_proxy)
        .with_error_details(config.expose_error_details());

    let app = app_router(state, &config.cors_origins);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    shutdown_on(tokio::signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. If the signal listener cannot be installed
/// the future never resolves and the server keeps running.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!("Failed to listen for shutdown signal, Ctrl+C disabled: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[tokio::test]
    async fn test_shutdown_on_signal_resolves() {
        let stopped = tokio::select! {
            biased;
            _ = shutdown_on(async { Ok(()) }) => true,
            _ = std::future::ready(()) => false,
        };
        assert!(stopped);
    }

    #[tokio::test]
    async fn test_shutdown_on_listener_error_keeps_running() {
        let stopped = tokio::select! {
            biased;
            _ = shutdown_on(async { Err(io::Error::other("signal handler unavailable")) }) => true,
            _ = std::future::ready(()) => false,
        };
        assert!(!stopped);
    }
}
