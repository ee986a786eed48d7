//! HTML rendering for the leaderboard page.
//!
//! The page is self-contained: inline CSS, no scripts. Legend highlighting is
//! expressed with `:has()` rules derived from the same dot appearances the
//! chart scene uses.

use crate::model::rows::RankedRow;
use crate::model::theme::Theme;
use crate::pipeline::stage4_scene::ChartScene;
use crate::pipeline::stage5_interact::{DotAppearance, HoverTarget, dot_appearances};
use crate::report::svg::render_svg;
use crate::report::{escape_html, fmt_num, format_pct};

pub const TABLE_COLUMNS: usize = 5;
pub const CHART_FALLBACK: &str = "Unable to load chart data.";
pub const TABLE_FALLBACK: &str =
    "Unable to load leaderboard data. Please ensure model_scores_summary.json is available.";

/// Chart region of the page: one rendering per theme, or nothing.
#[derive(Debug, Clone)]
pub enum ChartSection<'a> {
    Rendered { light: &'a ChartScene, dark: &'a ChartScene },
    Fallback,
}

#[derive(Debug, Clone)]
pub enum TableSection<'a> {
    Rendered(&'a [RankedRow]),
    Fallback,
}

pub fn render_table_rows(rows: &[RankedRow]) -> String {
    let mut out = String::new();
    for ranked in rows {
        let row = &ranked.row;
        out.push_str(&format!(
            r#"<tr class="lb-row" title="{tooltip}">
  <td class="lb-rank">{rank}</td>
  <td class="lb-model">{model}</td>
  <td class="lb-score lb-average">{average}</td>
  <td class="lb-score lb-adversarial">{adversarial}</td>
  <td class="lb-score lb-benign">{benign}</td>
</tr>
"#,
            tooltip = escape_html(&row.seed_tooltip()),
            rank = ranked.rank,
            model = escape_html(&row.model),
            average = format_pct(row.average_score),
            adversarial = format_pct(row.adversarial_score),
            benign = format_pct(row.benign_score),
        ));
    }
    out
}

pub fn render_table_fallback() -> String {
    format!(
        r#"<tr>
  <td colspan="{TABLE_COLUMNS}" class="lb-fallback">{TABLE_FALLBACK}</td>
</tr>
"#
    )
}

pub fn render_chart_fallback() -> String {
    format!(r#"<p class="lb-fallback">{CHART_FALLBACK}</p>"#)
}

pub fn render_legend(scene: &ChartScene) -> String {
    let g = &scene.geometry;
    let mut out = String::from(r#"<div class="chart-legend">"#);
    out.push('\n');
    for (series, entry) in scene.legend.iter().enumerate() {
        out.push_str(&format!(
            r#"<div class="legend-item" data-series="{series}" data-provider="{provider}"><span class="legend-swatch" style="width:{sw}px;height:{sw}px;background:{color}"></span><span class="legend-name" style="font-size:{font}px">{provider}</span></div>"#,
            provider = escape_html(&entry.provider),
            sw = fmt_num(g.legend_swatch),
            color = entry.color,
            font = fmt_num(g.legend_font),
        ));
        out.push('\n');
    }
    out.push_str("</div>\n");
    out
}

/// Per-provider highlight rules for one chart wrapper.
pub fn legend_css(scene: &ChartScene, wrapper: &str) -> String {
    let g = &scene.geometry;
    let mut css = format!(
        ".{wrapper} .legend-item:hover{{background:{}}}\n",
        scene.colors.legend_hover
    );
    for (series, entry) in scene.legend.iter().enumerate() {
        let looks = dot_appearances(scene, &HoverTarget::Legend(entry.provider.clone()));
        let pick = |want_match: bool| {
            scene
                .dots
                .iter()
                .zip(&looks)
                .find(|(dot, _)| (dot.series == series) == want_match)
                .map(|(_, look)| *look)
        };
        let matched = pick(true).unwrap_or_else(|| DotAppearance::legend_match(g));
        let dimmed = pick(false).unwrap_or_else(|| DotAppearance::legend_dimmed(g));

        let active = format!(".{wrapper}:has(.legend-item[data-series=\"{series}\"]:hover)");
        css.push_str(&format!(
            "{active} .dot circle{{{}}}{active} .dot text{{opacity:{}}}\n",
            appearance_css(&dimmed),
            fmt_num(dimmed.label_opacity)
        ));
        css.push_str(&format!(
            "{active} .dot[data-series=\"{series}\"] circle{{{}}}{active} .dot[data-series=\"{series}\"] text{{opacity:{}}}\n",
            appearance_css(&matched),
            fmt_num(matched.label_opacity)
        ));
    }
    css
}

fn appearance_css(look: &DotAppearance) -> String {
    format!(
        "r:{}px;fill-opacity:{};stroke-opacity:{}",
        fmt_num(look.radius),
        fmt_num(look.fill_opacity),
        fmt_num(look.stroke_opacity)
    )
}

fn render_chart_block(scene: &ChartScene) -> String {
    let wrapper = chart_wrapper_class(scene.theme);
    let c = &scene.colors;
    format!(
        r#"<style>
.{wrapper} .chart-legend{{border:1px solid {border};background:{bg};color:{text}}}
{legend_css}</style>
<div class="lb-chart {wrapper}">
{svg}{legend}</div>
"#,
        border = c.legend_border,
        bg = c.background,
        text = c.text,
        legend_css = legend_css(scene, wrapper),
        svg = render_svg(scene),
        legend = render_legend(scene),
    )
}

fn chart_wrapper_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "lb-chart-light",
        Theme::Dark => "lb-chart-dark",
    }
}

pub fn render_page(chart: &ChartSection<'_>, table: &TableSection<'_>) -> String {
    let chart_html = match chart {
        ChartSection::Rendered { light, dark } => {
            format!("{}{}", render_chart_block(light), render_chart_block(dark))
        }
        ChartSection::Fallback => render_chart_fallback(),
    };
    let table_body = match table {
        TableSection::Rendered(rows) => render_table_rows(rows),
        TableSection::Fallback => render_table_fallback(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Model Leaderboard</title>
<style>{css}</style>
</head>
<body>
<main class="lb-container">
<h1>Model Leaderboard</h1>
<section class="lb-chart-section">
{chart_html}</section>
<section class="lb-table-section">
<table class="lb-table">
<thead>
<tr><th>Rank</th><th>Model</th><th>Average Score</th><th>Adversarial Score</th><th>Benign Score</th></tr>
</thead>
<tbody>
{table_body}</tbody>
</table>
</section>
</main>
</body>
</html>
"#,
        css = PAGE_CSS,
    )
}

const PAGE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; color: #111827; background: #ffffff; }
.lb-container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.lb-chart { position: relative; width: 100%; }
.lb-chart-dark { display: none; }
.chart-legend { display: flex; flex-wrap: wrap; justify-content: center; gap: 12px 24px; margin-top: 16px; padding: 12px 20px; border-radius: 8px; width: 100%; }
.legend-item { display: flex; align-items: center; gap: 6px; cursor: pointer; padding: 4px 8px; border-radius: 6px; transition: background 0.15s; }
.legend-swatch { border-radius: 50%; display: inline-block; flex-shrink: 0; }
.legend-name { white-space: nowrap; }
.lb-table { width: 100%; border-collapse: collapse; margin-top: 2rem; }
.lb-table th, .lb-table td { padding: 1rem; text-align: left; }
.lb-row { border-top: 1px solid #e5e7eb; cursor: help; transition: background 0.15s; }
.lb-row:hover { background: #f9fafb; }
.lb-model { font-weight: 500; }
.lb-score { text-align: center; font-weight: 600; }
.lb-average { color: #2563eb; }
.lb-adversarial { color: #dc2626; }
.lb-benign { color: #16a34a; }
.lb-fallback { text-align: center; color: #6b7280; padding: 2rem; }
@media (prefers-color-scheme: dark) {
  body { color: #e5e7eb; background: #0a0a0a; }
  .lb-chart-light { display: none; }
  .lb-chart-dark { display: block; }
  .lb-row { border-top-color: #2a2a2a; }
  .lb-row:hover { background: #1a1a1a; }
  .lb-average { color: #60a5fa; }
  .lb-adversarial { color: #f87171; }
  .lb-benign { color: #4ade80; }
  .lb-fallback { color: #9ca3af; }
}
"#;

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
