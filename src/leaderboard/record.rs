use serde::{Deserialize, Serialize};

/// Result of a single TAC sub-test within a model's report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubScore {
    /// Sub-test identifier (e.g., "TAC-522")
    pub name: String,
    /// Score on a 0-1 scale
    pub score: f64,
    /// Error message if the sub-test errored instead of completing
    pub error: Option<String>,
}

impl SubScore {
    /// Whether this sub-test counts as solved for aggregation purposes.
    ///
    /// A sub-test is successful when its score is at least 0.75 and it
    /// carries no error. The literal string "null" is treated as no error
    /// for records constructed outside the parser.
    pub fn is_success(&self) -> bool {
        self.score >= 0.75 && self.error.as_deref().map_or(true, |e| e == "null")
    }
}

/// Parsed results for one evaluated model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Model identifier
    pub name: String,
    /// Average score across the benchmark, 0-100 scale
    pub score: f64,
    /// Per-sub-test breakdown in document order
    pub sub_scores: Vec<SubScore>,
}

/// A score record decorated with its leaderboard position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedModel {
    /// 1-based position after sorting by score descending
    pub rank: u32,
    /// Model identifier
    pub name: String,
    /// Average score, 0-100 scale
    pub score: f64,
    /// Display color assigned from the palette by rank
    pub color: String,
    /// Per-sub-test breakdown in document order
    pub sub_scores: Vec<SubScore>,
}

/// One model's pass/fail outcome for a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOutcome {
    pub model_name: String,
    pub success: bool,
}

/// Cross-model success statistics for one sub-test identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionStat {
    /// Sub-test identifier
    pub name: String,
    /// Models that solved this question
    pub correct_count: u32,
    /// Models that reported this question at all
    pub total_count: u32,
    /// correct_count / total_count as a percentage
    pub percentage: f64,
    /// Per-model outcomes used to render badges
    pub model_results: Vec<ModelOutcome>,
}
