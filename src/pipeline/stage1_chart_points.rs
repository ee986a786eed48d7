use tracing::warn;

use crate::input::summary::{ModelSummary, ScoresSummary};
use crate::model::points::ChartPoint;

/// Averages each model's reports into one chart point.
///
/// Points keep the position of the first model with a given name; a later
/// entry with the same name replaces the scores and provider. Models without
/// reports are left out.
pub fn build_chart_points(summary: &ScoresSummary) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = Vec::with_capacity(summary.models.len());

    for model in &summary.models {
        let Some(point) = average_model(model) else {
            warn!(model = %model.model, "model has no reports; leaving it off the chart");
            continue;
        };
        if let Some(existing) = points.iter_mut().find(|p| p.model == point.model) {
            warn!(
                model = %point.model,
                "duplicate model name in summary; later entry overwrites chart point"
            );
            *existing = point;
        } else {
            points.push(point);
        }
    }

    points
}

fn average_model(model: &ModelSummary) -> Option<ChartPoint> {
    if model.reports.is_empty() {
        return None;
    }
    let n = model.reports.len() as f64;
    let adversarial = model
        .reports
        .iter()
        .map(|r| r.adversarial_score)
        .sum::<f64>()
        / n;
    let benign = model.reports.iter().map(|r| r.benign_score).sum::<f64>() / n;
    Some(ChartPoint {
        model: model.model.clone(),
        provider: model.provider_label().to_string(),
        adversarial,
        benign,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_chart_points.rs"]
mod tests;
