use tracing::debug;

use crate::model::labels::shorten_label;
use crate::model::palette::ProviderPalette;
use crate::model::points::ChartPoint;
use crate::model::theme::{Theme, ThemeColors};
use crate::pipeline::stage3_layout::{
    Geometry, LinearScale, TICK_COUNT, domain_ceiling, format_tick,
};

pub const X_AXIS_TITLE: &str = "Adversarial Score (%)";
pub const Y_AXIS_TITLE: &str = "Benign Score (%)";

/// Everything needed to draw one frame of the scatter chart. Coordinates of
/// ticks and dots are relative to the inner plot area; titles are relative
/// to the whole surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub theme: Theme,
    pub colors: ThemeColors,
    pub geometry: Geometry,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub x_title: AxisTitle,
    pub y_title: AxisTitle,
    pub dots: Vec<Dot>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTitle {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
    pub rotated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub model: String,
    pub provider: String,
    pub label: String,
    pub color: &'static str,
    pub series: usize,
    pub cx: f64,
    pub cy: f64,
    pub adversarial: f64,
    pub benign: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub provider: String,
    pub color: &'static str,
}

pub fn build_scene(
    points: &[ChartPoint],
    geometry: Geometry,
    theme: Theme,
    palette: &ProviderPalette,
) -> ChartScene {
    let x_max = max_of(points.iter().map(|p| p.adversarial));
    let y_max = max_of(points.iter().map(|p| p.benign));
    let x_scale = LinearScale::new((0.0, domain_ceiling(x_max)), (0.0, geometry.inner_width));
    let y_scale = LinearScale::new((0.0, domain_ceiling(y_max)), (geometry.inner_height, 0.0));

    let legend = legend_entries(points, palette);

    let dots = points
        .iter()
        .map(|p| Dot {
            model: p.model.clone(),
            provider: p.provider.clone(),
            label: shorten_label(&p.model),
            color: palette.color(&p.provider),
            series: legend
                .iter()
                .position(|e| e.provider == p.provider)
                .unwrap_or_default(),
            cx: x_scale.map(p.adversarial),
            cy: y_scale.map(p.benign),
            adversarial: p.adversarial,
            benign: p.benign,
        })
        .collect::<Vec<_>>();

    let m = geometry.margin;
    let x_title = AxisTitle {
        text: X_AXIS_TITLE,
        x: m.left + geometry.inner_width / 2.0,
        y: geometry.height - geometry.x_label_offset,
        rotated: false,
    };
    let y_title = AxisTitle {
        text: Y_AXIS_TITLE,
        x: -(m.top + geometry.inner_height / 2.0),
        y: geometry.axis_label_y,
        rotated: true,
    };

    debug!(
        width = geometry.width,
        height = geometry.height,
        dots = dots.len(),
        providers = legend.len(),
        theme = theme.name(),
        "built chart scene"
    );

    ChartScene {
        theme,
        colors: theme.colors(),
        x_ticks: ticks(&x_scale),
        y_ticks: ticks(&y_scale),
        geometry,
        x_title,
        y_title,
        dots,
        legend,
    }
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(None, |acc: Option<f64>, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
    .unwrap_or(0.0)
}

fn ticks(scale: &LinearScale) -> Vec<Tick> {
    scale
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|value| Tick {
            position: scale.map(value),
            label: format_tick(value),
        })
        .collect()
}

/// Distinct providers of the plotted points, alphabetically.
pub fn legend_entries(points: &[ChartPoint], palette: &ProviderPalette) -> Vec<LegendEntry> {
    let mut providers: Vec<&str> = points.iter().map(|p| p.provider.as_str()).collect();
    providers.sort_unstable();
    providers.dedup();
    providers
        .into_iter()
        .map(|provider| LegendEntry {
            provider: provider.to_string(),
            color: palette.color(provider),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_scene.rs"]
mod tests;
