use super::*;
use crate::input::summary::{ModelSummary, Report};

fn report(seed: Option<&str>, adv: f64, ben: f64) -> Report {
    Report {
        seed: seed.map(str::to_string),
        adversarial_score: adv,
        benign_score: ben,
    }
}

fn summary(models: Vec<(&str, Vec<Report>)>) -> ScoresSummary {
    ScoresSummary {
        models: models
            .into_iter()
            .map(|(name, reports)| ModelSummary {
                model: name.to_string(),
                provider: Some("P".to_string()),
                reports,
            })
            .collect(),
    }
}

#[test]
fn test_one_row_per_report() {
    let s = summary(vec![
        ("m1", vec![report(None, 10.0, 20.0), report(Some("2"), 30.0, 40.0)]),
        ("m2", vec![report(Some("1"), 5.0, 5.0)]),
        ("m3", Vec::new()),
    ]);
    let rows = build_table_rows(&s);
    assert_eq!(rows.len(), s.total_reports());
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_example_averages_sorted() {
    let s = summary(vec![(
        "m1",
        vec![report(None, 30.0, 40.0), report(None, 10.0, 20.0)],
    )]);
    let rows = build_table_rows(&s);
    let averages: Vec<f64> = rows.iter().map(|r| r.row.average_score).collect();
    assert_eq!(averages, vec![15.0, 35.0]);
}

#[test]
fn test_ranks_are_one_based_and_increasing() {
    let s = summary(vec![
        ("a", vec![report(None, 90.0, 90.0)]),
        ("b", vec![report(None, 10.0, 10.0)]),
        ("c", vec![report(None, 50.0, 50.0)]),
    ]);
    let rows = build_table_rows(&s);
    let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    let models: Vec<&str> = rows.iter().map(|r| r.row.model.as_str()).collect();
    assert_eq!(models, vec!["b", "c", "a"]);
    for pair in rows.windows(2) {
        assert!(pair[0].row.average_score <= pair[1].row.average_score);
    }
}

#[test]
fn test_ties_keep_input_order() {
    let s = summary(vec![
        ("first", vec![report(None, 10.0, 30.0)]),
        ("second", vec![report(None, 30.0, 10.0)]),
        ("third", vec![report(None, 20.0, 20.0)]),
    ]);
    let rows = build_table_rows(&s);
    let models: Vec<&str> = rows.iter().map(|r| r.row.model.as_str()).collect();
    assert_eq!(models, vec!["first", "second", "third"]);
}

#[test]
fn test_seed_defaults_and_tooltip() {
    let s = summary(vec![(
        "m",
        vec![report(None, 1.0, 1.0), report(Some(""), 2.0, 2.0), report(Some("42"), 3.0, 3.0)],
    )]);
    let rows = build_table_rows(&s);
    assert_eq!(rows[0].row.seed, "-");
    assert_eq!(rows[0].row.seed_tooltip(), "Seed: Not specified");
    assert_eq!(rows[1].row.seed, "-");
    assert_eq!(rows[2].row.seed_tooltip(), "Seed: 42");
}
