//! Dialect B: repeated flat blocks with no `models:` wrapper.
//!
//! ```yaml
//! model: claude-sonnet-4
//! average_score: 43.06
//! scores:
//!   - TAC-522: 0.15
//!   - TAC-505: 1.0
//!
//! model: gpt-5
//! average_score: 21.06
//! scores:
//!   - TAC-522: 0.15
//! ```
//!
//! Blocks are separated by blank lines or by the next `model:` line. The
//! model name may ride on the `model:` line itself or appear on a separate
//! `name:` line.

use super::{field_value, inline_sub_score, PendingRecord};
use crate::leaderboard::record::ScoreRecord;

pub(super) fn parse(text: &str) -> Vec<ScoreRecord> {
    let mut records = Vec::new();
    let mut pending = PendingRecord::new();
    let mut in_scores = false;

    for line in text.lines() {
        let line = line.trim();

        // Blank lines terminate the current block in this dialect
        if line.is_empty() {
            pending.flush_into(&mut records);
            in_scores = false;
            continue;
        }

        if let Some(value) = field_value(line, "model:") {
            pending.flush_into(&mut records);
            in_scores = false;
            pending.set_name(value);
            continue;
        }

        if let Some(value) = field_value(line, "name:") {
            pending.set_name(value);
        } else if let Some(value) = field_value(line, "average_score:") {
            pending.set_score(value);
        } else if line.starts_with("scores:") {
            in_scores = true;
        } else if in_scores {
            if let Some(entry) = line.strip_prefix("- ") {
                if let Some(sub) = inline_sub_score(entry) {
                    pending.sub_scores.push(sub);
                }
            }
        }
        // Anything else is an unrecognized line; skip it
    }

    pending.flush_into(&mut records);

    records
}
