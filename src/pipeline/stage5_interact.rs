use crate::pipeline::stage3_layout::Geometry;
use crate::pipeline::stage4_scene::ChartScene;

pub const DEFAULT_FILL_OPACITY: f64 = 0.85;
pub const DEFAULT_STROKE_OPACITY: f64 = 0.4;
pub const DIMMED_OPACITY: f64 = 0.15;
pub const DIMMED_STROKE_OPACITY: f64 = 0.1;

const TOOLTIP_OFFSET_X: f64 = 14.0;
const TOOLTIP_OFFSET_Y: f64 = -10.0;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HoverTarget {
    #[default]
    None,
    Point(usize),
    Legend(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotAppearance {
    pub radius: f64,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
    pub label_opacity: f64,
}

impl DotAppearance {
    pub fn resting(g: &Geometry) -> Self {
        Self {
            radius: g.dot_radius,
            fill_opacity: DEFAULT_FILL_OPACITY,
            stroke_opacity: DEFAULT_STROKE_OPACITY,
            label_opacity: 1.0,
        }
    }

    pub fn pointed(g: &Geometry) -> Self {
        Self {
            radius: g.dot_radius_hover,
            fill_opacity: 1.0,
            stroke_opacity: 0.8,
            label_opacity: 1.0,
        }
    }

    pub fn legend_match(g: &Geometry) -> Self {
        Self {
            radius: g.dot_radius_hover,
            fill_opacity: 1.0,
            stroke_opacity: 0.9,
            label_opacity: 1.0,
        }
    }

    pub fn legend_dimmed(g: &Geometry) -> Self {
        Self {
            radius: g.dot_radius_dim,
            fill_opacity: DIMMED_OPACITY,
            stroke_opacity: DIMMED_STROKE_OPACITY,
            label_opacity: DIMMED_OPACITY,
        }
    }
}

/// Appearance of every dot, in scene order, under the given hover state.
pub fn dot_appearances(scene: &ChartScene, hover: &HoverTarget) -> Vec<DotAppearance> {
    let g = &scene.geometry;
    scene
        .dots
        .iter()
        .enumerate()
        .map(|(idx, dot)| match hover {
            HoverTarget::None => DotAppearance::resting(g),
            HoverTarget::Point(target) if *target == idx => DotAppearance::pointed(g),
            HoverTarget::Point(_) => DotAppearance::resting(g),
            HoverTarget::Legend(provider) if *provider == dot.provider => {
                DotAppearance::legend_match(g)
            }
            HoverTarget::Legend(_) => DotAppearance::legend_dimmed(g),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub provider: String,
    pub provider_color: &'static str,
    pub adversarial: String,
    pub benign: String,
    pub x: f64,
    pub y: f64,
}

/// Tooltip for a hovered point, placed next to `pointer` (surface coordinates).
pub fn tooltip_for(scene: &ChartScene, hover: &HoverTarget, pointer: (f64, f64)) -> Option<Tooltip> {
    let HoverTarget::Point(idx) = hover else {
        return None;
    };
    let dot = scene.dots.get(*idx)?;
    Some(Tooltip {
        title: dot.model.clone(),
        provider: dot.provider.clone(),
        provider_color: dot.color,
        adversarial: format!("Adversarial: {:.2}%", dot.adversarial),
        benign: format!("Benign: {:.2}%", dot.benign),
        x: pointer.0 + TOOLTIP_OFFSET_X,
        y: pointer.1 + TOOLTIP_OFFSET_Y,
    })
}

/// Surface coordinates of a dot center.
pub fn dot_anchor(scene: &ChartScene, idx: usize) -> Option<(f64, f64)> {
    let dot = scene.dots.get(idx)?;
    let m = scene.geometry.margin;
    Some((m.left + dot.cx, m.top + dot.cy))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_interact.rs"]
mod tests;
