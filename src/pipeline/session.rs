use tracing::debug;

use crate::input::summary::ScoresSummary;
use crate::model::palette::ProviderPalette;
use crate::model::points::ChartPoint;
use crate::model::theme::Theme;
use crate::pipeline::stage1_chart_points::build_chart_points;
use crate::pipeline::stage3_layout::{RenderError, compute_geometry};
use crate::pipeline::stage4_scene::{ChartScene, build_scene};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    Resize { width: f64 },
    ThemeChanged(Theme),
}

type RedrawListener = Box<dyn FnMut(&ChartScene)>;

/// Chart state across redraws. Every event rebuilds the palette and the
/// whole scene; nothing is patched incrementally.
pub struct ChartSession {
    points: Vec<ChartPoint>,
    providers: Vec<Option<String>>,
    width: f64,
    theme: Theme,
    listeners: Vec<RedrawListener>,
}

impl ChartSession {
    pub fn new(
        points: Vec<ChartPoint>,
        providers: Vec<Option<String>>,
        width: f64,
        theme: Theme,
    ) -> Self {
        Self {
            points,
            providers,
            width,
            theme,
            listeners: Vec::new(),
        }
    }

    pub fn from_summary(summary: &ScoresSummary, width: f64, theme: Theme) -> Self {
        let providers = summary
            .providers()
            .into_iter()
            .map(|p| p.map(str::to_string))
            .collect();
        Self::new(build_chart_points(summary), providers, width, theme)
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn on_redraw(&mut self, listener: impl FnMut(&ChartScene) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn palette(&self) -> ProviderPalette {
        ProviderPalette::assign(self.providers.iter().map(Option::as_deref))
    }

    pub fn draw(&mut self) -> Result<ChartScene, RenderError> {
        let geometry = compute_geometry(self.width)?;
        let palette = self.palette();
        let scene = build_scene(&self.points, geometry, self.theme, &palette);
        for listener in &mut self.listeners {
            listener(&scene);
        }
        Ok(scene)
    }

    pub fn dispatch(&mut self, event: ChartEvent) -> Result<ChartScene, RenderError> {
        debug!(?event, "chart redraw");
        match event {
            ChartEvent::Resize { width } => self.width = width,
            ChartEvent::ThemeChanged(theme) => self.theme = theme,
        }
        self.draw()
    }
}

type ThemeListener = Box<dyn FnMut(Theme)>;

/// Page-wide light/dark switch that notifies subscribers after every change.
pub struct ThemeSwitch {
    current: Theme,
    subscribers: Vec<ThemeListener>,
}

impl ThemeSwitch {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: initial,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        for subscriber in &mut self.subscribers {
            subscriber(theme);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/session.rs"]
mod tests;
