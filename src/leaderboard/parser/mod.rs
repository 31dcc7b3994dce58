//! Best-effort parser for the informal YAML dialects produced by the
//! benchmark harness.
//!
//! The score documents are hand-authored and are not valid YAML, so they are
//! scraped line by line instead of going through a real YAML parser. Two
//! layouts exist in the wild: a list of maps under a top-level `models:` key
//! (dialect A) and repeated flat blocks separated by blank lines (dialect B).
//! Each gets its own strategy behind one entry point; a structural probe on
//! the `models:` root line picks between them.
//!
//! The parser never fails: unrecognized lines are skipped and records missing
//! a name or a parseable score are dropped at flush time.

mod dialect_a;
mod dialect_b;

use super::record::{ScoreRecord, SubScore};

/// Parse a scores document into score records, preserving document order.
pub fn parse_scores(text: &str) -> Vec<ScoreRecord> {
    if has_models_root(text) {
        dialect_a::parse(text)
    } else {
        dialect_b::parse(text)
    }
}

fn has_models_root(text: &str) -> bool {
    text.lines().any(|line| line.trim() == "models:")
}

/// Strip `key` from the start of `line` and return the trimmed remainder.
fn field_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key).map(str::trim)
}

/// Parse a float the way the harness writes them; anything unparseable
/// becomes NaN so the incomplete record is dropped at flush time.
fn parse_float(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

/// Match a sub-test section header of the form `TAC-<digits>:` and return
/// the sub-test name.
fn tac_header(line: &str) -> Option<&str> {
    let name = line.strip_suffix(':')?;
    is_tac_name(name).then_some(name)
}

fn is_tac_name(name: &str) -> bool {
    match name.strip_prefix("TAC-") {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Parse a flattened single-line sub-test entry: `TAC-<digits>: <float>`,
/// optionally single-quoted. Returns None for anything else, including
/// entries whose value does not parse as a finite float.
fn inline_sub_score(entry: &str) -> Option<SubScore> {
    let entry = entry
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or(entry);

    let (name, value) = entry.split_once(':')?;
    if !is_tac_name(name.trim()) {
        return None;
    }
    let score: f64 = value.trim().parse().ok()?;
    if !score.is_finite() {
        return None;
    }

    Some(SubScore {
        name: name.trim().to_string(),
        score,
        error: None,
    })
}

/// Accumulator for the model record currently being scanned.
///
/// This is the explicit form of the "pending record" state: fields fill in
/// as their lines are seen, and `flush_into` emits the record only when it
/// is complete.
#[derive(Debug)]
struct PendingRecord {
    name: Option<String>,
    score: f64,
    sub_scores: Vec<SubScore>,
}

impl PendingRecord {
    fn new() -> Self {
        Self {
            name: None,
            score: f64::NAN,
            sub_scores: Vec::new(),
        }
    }

    fn set_name(&mut self, value: &str) {
        if !value.is_empty() {
            self.name = Some(value.to_string());
        }
    }

    fn set_score(&mut self, value: &str) {
        self.score = parse_float(value);
    }

    /// Emit this record if both name and score were parsed, then reset.
    /// Incomplete records are discarded silently.
    fn flush_into(&mut self, results: &mut Vec<ScoreRecord>) {
        let pending = std::mem::replace(self, Self::new());
        if let Some(name) = pending.name {
            if pending.score.is_finite() {
                results.push(ScoreRecord {
                    name,
                    score: pending.score,
                    sub_scores: pending.sub_scores,
                });
            }
        }
    }
}

/// Accumulator for a nested sub-test block (`TAC-<n>:` followed by
/// `score:` / `error:` lines).
#[derive(Debug)]
struct PendingSubScore {
    name: String,
    score: Option<f64>,
    error: Option<String>,
}

impl PendingSubScore {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            score: None,
            error: None,
        }
    }

    fn set_score(&mut self, value: &str) {
        self.score = Some(parse_float(value));
    }

    fn set_error(&mut self, value: &str) {
        // The harness writes `error: null` for clean runs
        self.error = if value == "null" {
            None
        } else {
            Some(value.to_string())
        };
    }

    fn finish(self) -> Option<SubScore> {
        let score = self.score.filter(|s| s.is_finite())?;
        Some(SubScore {
            name: self.name,
            score,
            error: self.error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_probe() {
        assert!(has_models_root("models:\n  - name: a\n"));
        assert!(has_models_root("  models:\n"));
        assert!(!has_models_root("model: a\naverage_score: 1\n"));
    }

    #[test]
    fn test_tac_header_match() {
        assert_eq!(tac_header("TAC-522:"), Some("TAC-522"));
        assert_eq!(tac_header("TAC-522"), None);
        assert_eq!(tac_header("TAC-:"), None);
        assert_eq!(tac_header("TAC-52a:"), None);
        assert_eq!(tac_header("QUX-522:"), None);
    }

    #[test]
    fn test_inline_sub_score_forms() {
        let plain = inline_sub_score("TAC-505: 1.0").unwrap();
        assert_eq!(plain.name, "TAC-505");
        assert_eq!(plain.score, 1.0);
        assert!(plain.error.is_none());

        let quoted = inline_sub_score("'TAC-522: 0.15'").unwrap();
        assert_eq!(quoted.name, "TAC-522");
        assert_eq!(quoted.score, 0.15);

        assert!(inline_sub_score("TAC-505: oops").is_none());
        assert!(inline_sub_score("note: 1.0").is_none());
    }

    #[test]
    fn test_pending_record_requires_name_and_score() {
        let mut results = Vec::new();

        let mut pending = PendingRecord::new();
        pending.set_name("model-a");
        pending.flush_into(&mut results);
        assert!(results.is_empty());

        let mut pending = PendingRecord::new();
        pending.set_score("41.5");
        pending.flush_into(&mut results);
        assert!(results.is_empty());

        let mut pending = PendingRecord::new();
        pending.set_name("model-a");
        pending.set_score("41.5");
        pending.flush_into(&mut results);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 41.5);
    }

    #[test]
    fn test_unparseable_score_drops_record() {
        let mut results = Vec::new();
        let mut pending = PendingRecord::new();
        pending.set_name("model-a");
        pending.set_score("not-a-number");
        pending.flush_into(&mut results);
        assert!(results.is_empty());
    }

    #[test]
    fn test_sub_score_error_normalization() {
        let mut sub = PendingSubScore::new("TAC-1");
        sub.set_score("0.9");
        sub.set_error("null");
        assert!(sub.finish().unwrap().error.is_none());

        let mut sub = PendingSubScore::new("TAC-1");
        sub.set_score("0.9");
        sub.set_error("rate_limited");
        assert_eq!(sub.finish().unwrap().error.as_deref(), Some("rate_limited"));
    }

    #[test]
    fn test_sub_score_without_score_is_dropped() {
        let sub = PendingSubScore::new("TAC-1");
        assert!(sub.finish().is_none());

        let mut sub = PendingSubScore::new("TAC-1");
        sub.set_score("garbage");
        assert!(sub.finish().is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_scores("").is_empty());
    }

    #[test]
    fn test_parse_is_pure() {
        let text = "models:\n  - name: a\n    average_score: 10.0\n";
        let first = parse_scores(text);
        let second = parse_scores(text);
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].name, second[0].name);
        assert_eq!(first[0].score, second[0].score);
    }
}
