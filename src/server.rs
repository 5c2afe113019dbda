//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream clients and services, then runs the Axum server until
//! Ctrl+C or SIGTERM.

use crate::application::services::{ArticlesService, LocationService, articles_service};
use crate::config::Config;
use crate::domain::article_filter::TrueArticles;
use crate::infrastructure::http::{BigDataCloudClient, WikimediaClient, build_http_client};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Wires the upstream clients and services described by `config`.
///
/// Both clients share one `reqwest` connection pool.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or a configured country
/// is unknown.
pub fn build_state(config: &Config) -> Result<AppState> {
    let http = build_http_client(&config.user_agent, config.http_timeout())
        .context("Failed to build HTTP client")?;

    let pageviews = Arc::new(WikimediaClient::new(
        http.clone(),
        config.pageviews_api_url.clone(),
    ));
    let location = Arc::new(BigDataCloudClient::new(
        http,
        config.location_api_url.clone(),
    ));

    let countries = articles_service::resolve_countries(&config.countries)
        .map_err(|e| anyhow::anyhow!("{e}: {}", e.details()))?;

    let articles_service = Arc::new(ArticlesService::new(
        pageviews,
        Arc::new(TrueArticles::new()),
        countries,
        config.join_policy,
    ));
    let location_service = Arc::new(LocationService::new(location));

    Ok(AppState::new(articles_service, location_service))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The services cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!(
        countries = state.articles_service.countries().len(),
        join_policy = %state.articles_service.join_policy(),
        "Services initialized"
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
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
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
