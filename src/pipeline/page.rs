use std::cell::RefCell;
use std::rc::Rc;

use tracing::error;

use crate::input::summary::ScoresSummary;
use crate::input::{LoadError, LoadOptions, SummarySource, load_summary};
use crate::model::points::ChartPoint;
use crate::model::rows::RankedRow;
use crate::model::theme::Theme;
use crate::pipeline::session::{ChartEvent, ChartSession, ThemeSwitch};
use crate::pipeline::stage2_table_rows::build_table_rows;
use crate::pipeline::stage3_layout::RenderError;
use crate::pipeline::stage4_scene::ChartScene;

#[derive(Debug, Clone)]
pub struct ChartFrames {
    pub points: Vec<ChartPoint>,
    pub selected: ChartScene,
    pub light: ChartScene,
    pub dark: ChartScene,
}

#[derive(Debug)]
pub enum ChartOutcome {
    Rendered(ChartFrames),
    Failed,
}

#[derive(Debug)]
pub enum TableOutcome {
    Rendered(Vec<RankedRow>),
    Failed,
}

#[derive(Debug)]
pub struct PageOutcome {
    pub chart: ChartOutcome,
    pub table: TableOutcome,
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub source: SummarySource,
    pub load: LoadOptions,
    pub width: f64,
    pub theme: Theme,
}

/// Runs the chart and table paths side by side. Each path loads the summary
/// on its own and falls back independently.
pub async fn load_page(request: &PageRequest) -> PageOutcome {
    let (chart, table) = tokio::join!(chart_path(request), table_path(request));
    PageOutcome { chart, table }
}

async fn chart_path(request: &PageRequest) -> ChartOutcome {
    let summary = match load_summary(&request.source, &request.load).await {
        Ok(summary) => summary,
        Err(err) => {
            log_load_failure("chart", &err);
            return ChartOutcome::Failed;
        }
    };
    match draw_chart_frames(&summary, request.width, request.theme) {
        Ok(frames) => ChartOutcome::Rendered(frames),
        Err(err) => {
            error!(error = %err, "error rendering chart");
            ChartOutcome::Failed
        }
    }
}

async fn table_path(request: &PageRequest) -> TableOutcome {
    match load_summary(&request.source, &request.load).await {
        Ok(summary) => TableOutcome::Rendered(build_table_rows(&summary)),
        Err(err) => {
            log_load_failure("leaderboard", &err);
            TableOutcome::Failed
        }
    }
}

fn log_load_failure(region: &str, err: &LoadError) {
    error!(region, kind = ?err.kind(), error = %err, "error loading {region} data");
}

/// Draws the chart at `width` in the selected theme, then flips the page
/// theme twice so both palettes are rendered through the theme subscription.
/// Frames are collected from the session's redraw listener.
pub fn draw_chart_frames(
    summary: &ScoresSummary,
    width: f64,
    theme: Theme,
) -> Result<ChartFrames, RenderError> {
    let session = Rc::new(RefCell::new(ChartSession::from_summary(
        summary,
        width,
        theme,
    )));
    let frames: Rc<RefCell<Vec<ChartScene>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let frames = Rc::clone(&frames);
        session
            .borrow_mut()
            .on_redraw(move |scene| frames.borrow_mut().push(scene.clone()));
    }

    let failure: Rc<RefCell<Option<RenderError>>> = Rc::new(RefCell::new(None));
    let mut switch = ThemeSwitch::new(theme);
    {
        let session = Rc::clone(&session);
        let failure = Rc::clone(&failure);
        switch.subscribe(move |t| {
            if let Err(err) = session.borrow_mut().dispatch(ChartEvent::ThemeChanged(t)) {
                failure.borrow_mut().get_or_insert(err);
            }
        });
    }

    let selected = session
        .borrow_mut()
        .dispatch(ChartEvent::Resize { width })?;
    switch.toggle();
    switch.toggle();
    if let Some(err) = failure.borrow_mut().take() {
        return Err(err);
    }

    let mut light = None;
    let mut dark = None;
    let drawn: Vec<ChartScene> = frames.borrow_mut().drain(..).collect();
    for scene in drawn {
        match scene.theme {
            Theme::Light => light = Some(scene),
            Theme::Dark => dark = Some(scene),
        }
    }
    let points = session.borrow().points().to_vec();

    Ok(ChartFrames {
        points,
        light: light.unwrap_or_else(|| selected.clone()),
        dark: dark.unwrap_or_else(|| selected.clone()),
        selected,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/page.rs"]
mod tests;
