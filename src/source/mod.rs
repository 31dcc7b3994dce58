//! Data source adapters: the scores document can come from an HTTP fetch
//! or from a local file.

mod fetch;
mod file;

pub use fetch::fetch_scores;
pub use file::{is_yaml_source, read_scores_file};

use thiserror::Error;

/// Errors surfaced by the data source adapters.
///
/// Only transport-level failures are reported to the user; everything the
/// parser encounters degrades silently to fewer records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to fetch data: {status}")]
    Status { status: reqwest::StatusCode },

    #[error("failed to read scores file: {0}")]
    Io(#[from] std::io::Error),
}
