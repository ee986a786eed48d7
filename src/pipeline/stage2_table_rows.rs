use crate::input::summary::ScoresSummary;
use crate::model::rows::{NO_SEED, RankedRow, TableRow};

/// Flattens every report into a row and ranks rows by ascending average.
pub fn build_table_rows(summary: &ScoresSummary) -> Vec<RankedRow> {
    let mut rows = Vec::with_capacity(summary.total_reports());
    for model in &summary.models {
        for report in &model.reports {
            let adversarial = report.adversarial_score;
            let benign = report.benign_score;
            rows.push(TableRow {
                model: model.model.clone(),
                seed: report.seed_label().unwrap_or(NO_SEED).to_string(),
                adversarial_score: adversarial,
                benign_score: benign,
                average_score: (adversarial + benign) / 2.0,
            });
        }
    }

    // sort_by is stable; equal averages keep input order.
    rows.sort_by(|a, b| {
        a.average_score
            .partial_cmp(&b.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| RankedRow { rank: idx + 1, row })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_table_rows.rs"]
mod tests;
