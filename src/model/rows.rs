use serde::Serialize;

pub const NO_SEED: &str = "-";

/// One leaderboard row per (model, report) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub model: String,
    pub seed: String,
    pub adversarial_score: f64,
    pub benign_score: f64,
    pub average_score: f64,
}

impl TableRow {
    pub fn seed_tooltip(&self) -> String {
        if self.seed == NO_SEED {
            "Seed: Not specified".to_string()
        } else {
            format!("Seed: {}", self.seed)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub rank: usize,
    pub row: TableRow,
}
