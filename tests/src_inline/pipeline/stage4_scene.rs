use super::*;
use crate::pipeline::stage3_layout::compute_geometry;

fn point(model: &str, provider: &str, adv: f64, ben: f64) -> ChartPoint {
    ChartPoint {
        model: model.to_string(),
        provider: provider.to_string(),
        adversarial: adv,
        benign: ben,
    }
}

fn scene(points: &[ChartPoint]) -> ChartScene {
    let palette = ProviderPalette::assign(points.iter().map(|p| Some(p.provider.as_str())));
    build_scene(points, compute_geometry(900.0).unwrap(), Theme::Light, &palette)
}

#[test]
fn test_domains_and_ticks() {
    let s = scene(&[point("a", "P", 42.0, 95.0), point("b", "Q", 10.0, 12.0)]);
    assert_eq!(s.x_ticks.last().map(|t| t.label.as_str()), Some("50%"));
    assert_eq!(s.x_ticks.last().map(|t| t.position), Some(s.geometry.inner_width));
    let labels: Vec<&str> = s.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0%", "20%", "40%", "60%", "80%", "100%"]);
    assert_eq!(s.x_ticks.len(), 6);
    assert_eq!(s.y_ticks[0].position, s.geometry.inner_height);
}

#[test]
fn test_dot_positions() {
    let s = scene(&[point("a", "P", 25.0, 50.0)]);
    // x domain [0,30] over 800px, y domain [0,60] over 395px inverted
    let dot = &s.dots[0];
    assert!((dot.cx - 25.0 / 30.0 * 800.0).abs() < 1e-9);
    assert!((dot.cy - (395.0 - 50.0 / 60.0 * 395.0)).abs() < 1e-9);
}

#[test]
fn test_colors_follow_palette() {
    let s = scene(&[
        point("a", "Zeta", 1.0, 1.0),
        point("b", "Alpha", 2.0, 2.0),
        point("c", "Zeta", 3.0, 3.0),
    ]);
    assert_eq!(s.dots[0].color, "#1f77b4");
    assert_eq!(s.dots[1].color, "#ff7f0e");
    assert_eq!(s.dots[2].color, s.dots[0].color);
    let legend: Vec<&str> = s.legend.iter().map(|e| e.provider.as_str()).collect();
    assert_eq!(legend, vec!["Alpha", "Zeta"]);
    assert_eq!(s.dots[0].series, 1);
    assert_eq!(s.dots[1].series, 0);
}

#[test]
fn test_labels_are_shortened() {
    let s = scene(&[point("mistral-7b-instruct-v0.1", "Mistral", 1.0, 1.0)]);
    assert_eq!(s.dots[0].label, "mistral-7b");
    assert_eq!(s.dots[0].model, "mistral-7b-instruct-v0.1");
}

#[test]
fn test_empty_points_default_domain() {
    let s = scene(&[]);
    assert_eq!(s.x_ticks.last().map(|t| t.label.as_str()), Some("10%"));
    assert!(s.dots.is_empty());
    assert!(s.legend.is_empty());
}

#[test]
fn test_axis_titles() {
    let s = scene(&[point("a", "P", 1.0, 1.0)]);
    assert_eq!(s.x_title.text, X_AXIS_TITLE);
    assert_eq!(s.x_title.x, 70.0 + 400.0);
    assert_eq!(s.x_title.y, 495.0 - 10.0);
    assert!(s.y_title.rotated);
    assert_eq!(s.y_title.x, -(40.0 + 395.0 / 2.0));
}
