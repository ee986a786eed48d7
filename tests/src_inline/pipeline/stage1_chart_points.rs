use super::*;
use crate::input::summary::Report;

fn report(adv: f64, ben: f64) -> Report {
    Report {
        seed: None,
        adversarial_score: adv,
        benign_score: ben,
    }
}

fn model(name: &str, provider: &str, reports: Vec<Report>) -> ModelSummary {
    ModelSummary {
        model: name.to_string(),
        provider: Some(provider.to_string()),
        reports,
    }
}

#[test]
fn test_single_model_mean() {
    let summary = ScoresSummary {
        models: vec![model("m1", "P", vec![report(10.0, 20.0), report(30.0, 40.0)])],
    };
    let points = build_chart_points(&summary);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].adversarial, 20.0);
    assert_eq!(points[0].benign, 30.0);
    assert_eq!(points[0].provider, "P");
}

#[test]
fn test_one_point_per_model_in_order() {
    let summary = ScoresSummary {
        models: vec![
            model("b", "X", vec![report(1.0, 2.0)]),
            model("a", "Y", vec![report(3.0, 4.0), report(5.0, 6.0), report(7.0, 8.0)]),
        ],
    };
    let points = build_chart_points(&summary);
    let names: Vec<&str> = points.iter().map(|p| p.model.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(points[1].adversarial, 5.0);
    assert_eq!(points[1].benign, 6.0);
}

#[test]
fn test_duplicate_overwrites_value_keeps_position() {
    let summary = ScoresSummary {
        models: vec![
            model("dup", "P", vec![report(10.0, 10.0)]),
            model("other", "Q", vec![report(50.0, 50.0)]),
            model("dup", "R", vec![report(90.0, 80.0)]),
        ],
    };
    let points = build_chart_points(&summary);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].model, "dup");
    assert_eq!(points[0].provider, "R");
    assert_eq!(points[0].adversarial, 90.0);
    assert_eq!(points[1].model, "other");
}

#[test]
fn test_empty_reports_excluded() {
    let summary = ScoresSummary {
        models: vec![
            model("empty", "P", Vec::new()),
            model("full", "P", vec![report(1.0, 1.0)]),
        ],
    };
    let points = build_chart_points(&summary);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].model, "full");
    assert!(points.iter().all(|p| p.adversarial.is_finite()));
}

#[test]
fn test_missing_and_empty_provider_plot_as_unknown() {
    let mut none = model("n", "", vec![report(1.0, 1.0)]);
    none.provider = None;
    let summary = ScoresSummary {
        models: vec![none, model("e", "", vec![report(2.0, 2.0)])],
    };
    let points = build_chart_points(&summary);
    assert_eq!(points[0].provider, "Unknown");
    assert_eq!(points[1].provider, "Unknown");
}
