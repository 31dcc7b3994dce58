//! Shared state for the web dashboard

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::cli::DashboardConfig;
use crate::leaderboard::{
    aggregate_questions, parse_scores, rank_models, QuestionStat, RankedModel,
};
use crate::source::{fetch_scores, SourceError};

/// Everything derived from one scores document.
///
/// The three views are always computed together from the same input text and
/// installed as a unit, so readers never observe a partially updated state.
#[derive(Debug, Clone)]
pub struct LoadedScores {
    pub models: Vec<RankedModel>,
    pub questions: Vec<QuestionStat>,
    pub raw: String,
    pub fetched_at: DateTime<Utc>,
    generation: u64,
}

/// Application state shared across all handlers
#[derive(Debug)]
pub struct DashboardState {
    /// Dashboard configuration
    pub config: DashboardConfig,
    /// Currently loaded leaderboard, if any fetch has succeeded yet
    loaded: RwLock<Option<LoadedScores>>,
    /// Monotonic counter of refresh requests, used to drop stale responses
    generation: AtomicU64,
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            loaded: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Fetch the scores document and install the derived leaderboard.
    ///
    /// Concurrent refreshes are not cancelled; instead each refresh takes a
    /// generation number up front and a response is ignored if a newer
    /// refresh has already installed its result. Returns the number of
    /// models parsed from the fetched document.
    pub async fn refresh(&self) -> Result<usize, SourceError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let raw = fetch_scores(&self.config.data_url).await?;
        Ok(self.install(raw, generation).await)
    }

    /// Parse, rank, and aggregate `raw`, then swap it in unless a newer
    /// generation already landed.
    async fn install(&self, raw: String, generation: u64) -> usize {
        let models = rank_models(parse_scores(&raw));
        let questions = aggregate_questions(&models);
        let count = models.len();

        let mut loaded = self.loaded.write().await;
        let stale = loaded
            .as_ref()
            .map_or(false, |current| current.generation > generation);
        if stale {
            tracing::debug!(
                "ignoring stale scores response (generation {})",
                generation
            );
        } else {
            *loaded = Some(LoadedScores {
                models,
                questions,
                raw,
                fetched_at: Utc::now(),
                generation,
            });
        }

        count
    }

    /// Snapshot of the currently loaded leaderboard
    pub async fn snapshot(&self) -> Option<LoadedScores> {
        let loaded = self.loaded.read().await;
        loaded.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DashboardState {
        DashboardState::new(DashboardConfig::for_url("https://example.com/s.yaml"))
    }

    const DOC: &str = "\
models:
  - name: model-a
    average_score: 50.0
";

    #[tokio::test]
    async fn test_install_replaces_all_views_together() {
        let state = state();
        assert!(state.snapshot().await.is_none());

        state.install(DOC.to_string(), 1).await;
        let loaded = state.snapshot().await.unwrap();
        assert_eq!(loaded.models.len(), 1);
        assert_eq!(loaded.raw, DOC);
    }

    #[tokio::test]
    async fn test_stale_response_is_ignored() {
        let state = state();

        let newer = "\
models:
  - name: newer-model
    average_score: 70.0
";
        state.install(newer.to_string(), 2).await;
        state.install(DOC.to_string(), 1).await;

        let loaded = state.snapshot().await.unwrap();
        assert_eq!(loaded.models[0].name, "newer-model");
    }

    #[tokio::test]
    async fn test_newer_response_replaces_older() {
        let state = state();
        state.install(DOC.to_string(), 1).await;

        let newer = "\
models:
  - name: newer-model
    average_score: 70.0
";
        state.install(newer.to_string(), 2).await;

        let loaded = state.snapshot().await.unwrap();
        assert_eq!(loaded.models[0].name, "newer-model");
    }
}
