//! Core leaderboard pipeline: parse the scores document, rank the models,
//! and aggregate per-question success statistics.

mod parser;
mod questions;
mod rank;
mod record;

pub use parser::parse_scores;
pub use questions::aggregate_questions;
pub use rank::{color_for_rank, rank_models, PALETTE};
pub use record::{ModelOutcome, QuestionStat, RankedModel, ScoreRecord, SubScore};
