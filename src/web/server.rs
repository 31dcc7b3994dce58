//! Web server setup and routing

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::handlers;
use super::state::DashboardState;
use crate::cli::DashboardConfig;

/// Start the dashboard server
pub async fn start_server(config: DashboardConfig) -> anyhow::Result<()> {
    let port = config.port;
    let state = Arc::new(DashboardState::new(config));

    // Load the scores document up front; a failed first fetch is not fatal,
    // the dashboard can be refreshed once the source is reachable
    match state.refresh().await {
        Ok(count) => info!("loaded {} models from {}", count, state.config.data_url),
        Err(e) => tracing::warn!("initial fetch failed: {}", e),
    }

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // HTML pages
        .route("/", get(handlers::index))
        // API endpoints
        .route("/api/health", get(handlers::health))
        .route("/api/leaderboard", get(handlers::api_leaderboard))
        .route("/api/questions", get(handlers::api_questions))
        .route("/api/refresh", post(handlers::api_refresh))
        .route("/api/scores/raw", get(handlers::api_raw_scores))
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting dashboard server on http://localhost:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
