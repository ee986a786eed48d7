use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoresSummary {
    pub models: Vec<ModelSummary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelSummary {
    pub model: String,
    #[serde(default)]
    pub provider: Option<String>,
    pub reports: Vec<Report>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Report {
    #[serde(default)]
    pub seed: Option<String>,
    pub adversarial_score: f64,
    pub benign_score: f64,
}

pub const UNKNOWN_PROVIDER: &str = "Unknown";

impl ScoresSummary {
    pub fn total_reports(&self) -> usize {
        self.models.iter().map(|m| m.reports.len()).sum()
    }

    /// Distinct raw provider values in order of first appearance. A missing
    /// provider and an empty one are kept apart.
    pub fn providers(&self) -> Vec<Option<&str>> {
        let mut out: Vec<Option<&str>> = Vec::new();
        for m in &self.models {
            let provider = m.provider.as_deref();
            if !out.contains(&provider) {
                out.push(provider);
            }
        }
        out
    }
}

impl ModelSummary {
    /// Provider shown on the chart; missing and empty values read as `Unknown`.
    pub fn provider_label(&self) -> &str {
        self.provider
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(UNKNOWN_PROVIDER)
    }
}

impl Report {
    /// Seed with empty strings treated as absent.
    pub fn seed_label(&self) -> Option<&str> {
        self.seed.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/summary.rs"]
mod tests;
