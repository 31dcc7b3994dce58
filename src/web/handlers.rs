//! HTTP handlers for the web dashboard

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::state::DashboardState;
use crate::leaderboard::{QuestionStat, RankedModel};

/// Response for the leaderboard view
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub title: String,
    pub description: String,
    pub fetched_at: Option<String>,
    pub models: Vec<RankedModel>,
    pub total: usize,
}

/// Response for the questions view
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub fetched_at: Option<String>,
    pub questions: Vec<QuestionStat>,
    pub total: usize,
}

// ============================================================================
// Page Handlers (HTML)
// ============================================================================

/// Dashboard page; the client renders both tabs from the JSON API
pub async fn index() -> Response {
    Html(include_str!("../../templates/index.html")).into_response()
}

// ============================================================================
// API Handlers (JSON)
// ============================================================================

/// Ranked models from the most recently loaded scores document
pub async fn api_leaderboard(
    State(state): State<Arc<DashboardState>>,
) -> Json<LeaderboardResponse> {
    let loaded = state.snapshot().await;

    let (fetched_at, models) = match loaded {
        Some(loaded) => (Some(loaded.fetched_at.to_rfc3339()), loaded.models),
        None => (None, Vec::new()),
    };

    let total = models.len();
    Json(LeaderboardResponse {
        title: state.config.title.clone(),
        description: state.config.description.clone(),
        fetched_at,
        models,
        total,
    })
}

/// Per-question success statistics
pub async fn api_questions(State(state): State<Arc<DashboardState>>) -> Json<QuestionsResponse> {
    let loaded = state.snapshot().await;

    let (fetched_at, questions) = match loaded {
        Some(loaded) => (Some(loaded.fetched_at.to_rfc3339()), loaded.questions),
        None => (None, Vec::new()),
    };

    let total = questions.len();
    Json(QuestionsResponse {
        fetched_at,
        questions,
        total,
    })
}

/// Re-fetch the scores document from the configured URL
pub async fn api_refresh(
    State(state): State<Arc<DashboardState>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match state.refresh().await {
        Ok(count) => Ok(Json(serde_json::json!({
            "status": "ok",
            "models_loaded": count
        }))),
        Err(e) => {
            tracing::warn!("refresh failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({
                    "status": "error",
                    "message": e.to_string()
                })),
            ))
        }
    }
}

/// Raw text of the most recently loaded scores document
pub async fn api_raw_scores(
    State(state): State<Arc<DashboardState>>,
) -> Result<String, StatusCode> {
    state
        .snapshot()
        .await
        .map(|loaded| loaded.raw)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Health check endpoint
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "tacboard"
    }))
}
