//! Per-question success statistics across all models.

use std::collections::HashMap;

use super::record::{ModelOutcome, QuestionStat, RankedModel};

/// Derive one stat per distinct sub-test name seen across all models.
///
/// A question's denominator counts only the models that reported it. Stats
/// are sorted by success percentage descending, ties broken by correct
/// count descending; further ties keep first-encounter order.
pub fn aggregate_questions(models: &[RankedModel]) -> Vec<QuestionStat> {
    let mut stats: Vec<QuestionStat> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for model in models {
        for sub in &model.sub_scores {
            let slot = *index.entry(sub.name.clone()).or_insert_with(|| {
                stats.push(QuestionStat {
                    name: sub.name.clone(),
                    correct_count: 0,
                    total_count: 0,
                    percentage: 0.0,
                    model_results: Vec::new(),
                });
                stats.len() - 1
            });

            let stat = &mut stats[slot];
            let success = sub.is_success();
            stat.total_count += 1;
            if success {
                stat.correct_count += 1;
            }
            stat.model_results.push(ModelOutcome {
                model_name: model.name.clone(),
                success,
            });
        }
    }

    for stat in &mut stats {
        if stat.total_count > 0 {
            stat.percentage = stat.correct_count as f64 / stat.total_count as f64 * 100.0;
        }
    }

    stats.sort_by(|a, b| {
        b.percentage
            .total_cmp(&a.percentage)
            .then(b.correct_count.cmp(&a.correct_count))
    });

    stats
}
