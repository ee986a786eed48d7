use serde::Serialize;

/// One averaged point per model on the adversarial/benign plane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub model: String,
    pub provider: String,
    pub adversarial: f64,
    pub benign: f64,
}
