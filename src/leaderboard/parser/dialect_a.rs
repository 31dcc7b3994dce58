//! Dialect A: a list of model maps under a top-level `models:` key.
//!
//! ```yaml
//! models:
//!   - name: claude-sonnet-4
//!     average_score: 43.06
//!     scores:
//!       TAC-522:
//!         score: 0.15
//!         error: null
//!   - name: gpt-5
//!     average_score: 21.06
//!     scores:
//!       - 'TAC-522: 0.15'
//! ```
//!
//! Any `- ` list item that is not a TAC entry starts a new model block; the
//! previous block is flushed at that point and again at end of input.

use super::{field_value, inline_sub_score, tac_header, PendingRecord, PendingSubScore};
use crate::leaderboard::record::ScoreRecord;

pub(super) fn parse(text: &str) -> Vec<ScoreRecord> {
    let mut records = Vec::new();
    let mut pending = PendingRecord::new();
    let mut pending_sub: Option<PendingSubScore> = None;
    let mut in_model = false;
    let mut in_scores = false;

    for line in text.lines() {
        let line = line.trim();

        if line == "models:" {
            continue;
        }

        // A list item that is not a TAC entry opens a new model block
        if let Some(rest) = line.strip_prefix("- ") {
            if !line.contains("TAC-") {
                flush_sub(&mut pending_sub, &mut pending);
                pending.flush_into(&mut records);
                in_model = true;
                in_scores = false;

                // The first field may ride on the list-item line itself
                if let Some(value) = field_value(rest, "average_score:") {
                    pending.set_score(value);
                } else if let Some(value) = field_value(rest, "name:") {
                    pending.set_name(value);
                }
                continue;
            }
        }

        if in_model {
            if let Some(value) = field_value(line, "average_score:") {
                pending.set_score(value);
                continue;
            }
            if let Some(value) = field_value(line, "name:") {
                pending.set_name(value);
                continue;
            }
            if line.starts_with("scores:") {
                in_scores = true;
                continue;
            }
        }

        if in_scores {
            if let Some(name) = tac_header(line) {
                flush_sub(&mut pending_sub, &mut pending);
                pending_sub = Some(PendingSubScore::new(name));
                continue;
            }
            if let Some(sub) = pending_sub.as_mut() {
                if let Some(value) = field_value(line, "error:") {
                    sub.set_error(value);
                    continue;
                }
                if let Some(value) = field_value(line, "score:") {
                    sub.set_score(value);
                    continue;
                }
            }
            // Inline entries can sit alongside nested blocks
            if let Some(entry) = line.strip_prefix("- ") {
                if let Some(sub) = inline_sub_score(entry) {
                    pending.sub_scores.push(sub);
                }
            }
        }
        // Anything else is an unrecognized line; skip it
    }

    flush_sub(&mut pending_sub, &mut pending);
    pending.flush_into(&mut records);

    records
}

fn flush_sub(pending_sub: &mut Option<PendingSubScore>, pending: &mut PendingRecord) {
    if let Some(sub) = pending_sub.take().and_then(PendingSubScore::finish) {
        pending.sub_scores.push(sub);
    }
}
