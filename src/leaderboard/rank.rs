//! Leaderboard ranking and color assignment.

use super::record::{RankedModel, ScoreRecord};

/// Display colors assigned to models by rank, cycling when the leaderboard
/// is longer than the palette. The order is fixed; the dashboard's visual
/// regression tests depend on it.
pub const PALETTE: [&str; 15] = [
    "#10b981", // emerald-500
    "#3b82f6", // blue-500
    "#a855f7", // purple-500
    "#f97316", // orange-500
    "#ec4899", // pink-500
    "#06b6d4", // cyan-500
    "#eab308", // yellow-500
    "#34d399", // emerald-400
    "#60a5fa", // blue-400
    "#c084fc", // purple-400
    "#fb923c", // orange-400
    "#f472b6", // pink-400
    "#22d3ee", // cyan-400
    "#facc15", // yellow-400
    "#f87171", // red-400
];

/// Color for a 1-based rank.
pub fn color_for_rank(rank: u32) -> &'static str {
    PALETTE[(rank as usize - 1) % PALETTE.len()]
}

/// Sort records by score descending and assign 1-based ranks and colors.
///
/// The sort is stable: models with equal scores keep their document order.
pub fn rank_models(mut records: Vec<ScoreRecord>) -> Vec<RankedModel> {
    records.sort_by(|a, b| b.score.total_cmp(&a.score));

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let rank = (i + 1) as u32;
            RankedModel {
                rank,
                name: record.name,
                score: record.score,
                color: color_for_rank(rank).to_string(),
                sub_scores: record.sub_scores,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, score: f64) -> ScoreRecord {
        ScoreRecord {
            name: name.to_string(),
            score,
            sub_scores: vec![],
        }
    }

    #[test]
    fn test_sorted_descending_with_dense_ranks() {
        let ranked = rank_models(vec![
            record("low", 10.0),
            record("high", 90.0),
            record("mid", 50.0),
        ]);

        assert_eq!(ranked[0].name, "high");
        assert_eq!(ranked[1].name, "mid");
        assert_eq!(ranked[2].name, "low");
        for (i, model) in ranked.iter().enumerate() {
            assert_eq!(model.rank, (i + 1) as u32);
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank_models(vec![
            record("first", 50.0),
            record("second", 50.0),
            record("third", 50.0),
        ]);
        assert_eq!(ranked[0].name, "first");
        assert_eq!(ranked[1].name, "second");
        assert_eq!(ranked[2].name, "third");
    }

    #[test]
    fn test_palette_cycles() {
        let len = PALETTE.len() as u32;
        for rank in 1..=len {
            assert_eq!(color_for_rank(rank), color_for_rank(rank + len));
        }
        assert_eq!(color_for_rank(1), PALETTE[0]);
        assert_eq!(color_for_rank(len), PALETTE[PALETTE.len() - 1]);
    }

    #[test]
    fn test_palette_tokens_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_models(vec![]).is_empty());
    }
}
