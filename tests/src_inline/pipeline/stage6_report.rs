use super::*;
use crate::input::summary::{ModelSummary, Report, ScoresSummary};
use crate::model::theme::Theme;
use crate::pipeline::page::draw_chart_frames;
use crate::pipeline::stage2_table_rows::build_table_rows;
use crate::report::html::{CHART_FALLBACK, TABLE_FALLBACK};

fn summary() -> ScoresSummary {
    ScoresSummary {
        models: vec![
            ModelSummary {
                model: "m1".to_string(),
                provider: Some("P".to_string()),
                reports: vec![
                    Report {
                        seed: Some("1".to_string()),
                        adversarial_score: 10.0,
                        benign_score: 20.0,
                    },
                    Report {
                        seed: None,
                        adversarial_score: 30.0,
                        benign_score: 40.0,
                    },
                ],
            },
            ModelSummary {
                model: "m2".to_string(),
                provider: Some("Q".to_string()),
                reports: vec![Report {
                    seed: None,
                    adversarial_score: 5.0,
                    benign_score: 5.0,
                }],
            },
        ],
    }
}

#[test]
fn test_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let s = summary();
    let outcome = PageOutcome {
        chart: ChartOutcome::Rendered(draw_chart_frames(&s, 900.0, Theme::Light).unwrap()),
        table: TableOutcome::Rendered(build_table_rows(&s)),
    };
    let written = write_reports(&outcome, dir.path()).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec![PAGE_FILE, CHART_FILE, POINTS_FILE, TABLE_FILE]);

    let tsv = std::fs::read_to_string(dir.path().join(TABLE_FILE)).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("1\tm2\t-\t5.000000"));
    assert!(lines[2].starts_with("2\tm1\t1\t15.000000"));

    let points: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join(POINTS_FILE)).unwrap())
            .unwrap();
    assert_eq!(points[0]["model"], "m1");
    assert_eq!(points[0]["adversarial"], 20.0);
    assert_eq!(points[1]["benign"], 5.0);
}

#[test]
fn test_failed_paths_write_only_page() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = PageOutcome {
        chart: ChartOutcome::Failed,
        table: TableOutcome::Failed,
    };
    let written = write_reports(&outcome, dir.path()).unwrap();
    assert_eq!(written.len(), 1);
    assert!(!dir.path().join(CHART_FILE).exists());
    let page = std::fs::read_to_string(dir.path().join(PAGE_FILE)).unwrap();
    assert!(page.contains(CHART_FALLBACK));
    assert!(page.contains(TABLE_FALLBACK));
}
