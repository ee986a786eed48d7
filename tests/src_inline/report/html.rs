use super::*;
use crate::model::palette::ProviderPalette;
use crate::model::points::ChartPoint;
use crate::model::rows::TableRow;
use crate::pipeline::stage3_layout::compute_geometry;
use crate::pipeline::stage4_scene::build_scene;

fn ranked(rank: usize, model: &str, seed: &str, adv: f64, ben: f64) -> RankedRow {
    RankedRow {
        rank,
        row: TableRow {
            model: model.to_string(),
            seed: seed.to_string(),
            adversarial_score: adv,
            benign_score: ben,
            average_score: (adv + ben) / 2.0,
        },
    }
}

fn scene(theme: Theme) -> ChartScene {
    let points = vec![
        ChartPoint {
            model: "a".to_string(),
            provider: "Meta".to_string(),
            adversarial: 10.0,
            benign: 20.0,
        },
        ChartPoint {
            model: "b".to_string(),
            provider: "Google".to_string(),
            adversarial: 30.0,
            benign: 40.0,
        },
    ];
    let palette = ProviderPalette::assign(points.iter().map(|p| Some(p.provider.as_str())));
    build_scene(&points, compute_geometry(900.0).unwrap(), theme, &palette)
}

#[test]
fn test_table_rows_markup() {
    let rows = vec![ranked(1, "m1", "-", 10.0, 20.0), ranked(2, "m<1>", "7", 30.0, 40.0)];
    let html = render_table_rows(&rows);
    assert_eq!(html.matches("<tr").count(), 2);
    assert!(html.contains(r#"title="Seed: Not specified""#));
    assert!(html.contains(r#"title="Seed: 7""#));
    assert!(html.contains(r#"<td class="lb-rank">1</td>"#));
    assert!(html.contains(r#"<td class="lb-rank">2</td>"#));
    assert!(html.contains(">15.00%<"));
    assert!(html.contains(">35.00%<"));
    assert!(html.contains("m&lt;1&gt;"));
}

#[test]
fn test_table_fallback_spans_all_columns() {
    let html = render_table_fallback();
    assert!(html.contains(r#"colspan="5""#));
    assert!(html.contains(TABLE_FALLBACK));
}

#[test]
fn test_legend_sorted_with_colors() {
    let s = scene(Theme::Light);
    let html = render_legend(&s);
    let google = html.find("Google").unwrap();
    let meta = html.find("Meta").unwrap();
    assert!(google < meta);
    assert!(html.contains("background:#1f77b4"));
    assert!(html.contains("background:#ff7f0e"));
}

#[test]
fn test_legend_css_dims_and_highlights() {
    let s = scene(Theme::Light);
    let css = legend_css(&s, "lb-chart-light");
    assert!(css.contains(
        ".lb-chart-light:has(.legend-item[data-series=\"0\"]:hover) .dot circle{r:5px;fill-opacity:0.15;stroke-opacity:0.1}"
    ));
    assert!(css.contains(
        ".lb-chart-light:has(.legend-item[data-series=\"1\"]:hover) .dot[data-series=\"1\"] circle{r:10px;fill-opacity:1;stroke-opacity:0.9}"
    ));
    assert!(css.contains(".lb-chart-light .legend-item:hover{background:#f3f4f6}"));
}

#[test]
fn test_page_with_fallbacks() {
    let page = render_page(&ChartSection::Fallback, &TableSection::Fallback);
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(CHART_FALLBACK));
    assert!(page.contains(TABLE_FALLBACK));
    assert!(!page.contains("<svg"));
}

#[test]
fn test_page_with_chart_and_rows() {
    let light = scene(Theme::Light);
    let dark = scene(Theme::Dark);
    let rows = vec![ranked(1, "a", "-", 10.0, 20.0)];
    let page = render_page(
        &ChartSection::Rendered {
            light: &light,
            dark: &dark,
        },
        &TableSection::Rendered(&rows),
    );
    assert_eq!(page.matches("<svg").count(), 2);
    assert!(page.contains("lb-chart-light"));
    assert!(page.contains("lb-chart-dark"));
    assert!(!page.contains(CHART_FALLBACK));
    assert!(!page.contains(TABLE_FALLBACK));
}
