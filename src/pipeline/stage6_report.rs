use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::rows::RankedRow;
use crate::pipeline::page::{ChartOutcome, PageOutcome, TableOutcome};
use crate::report::html::{ChartSection, TableSection, render_page};
use crate::report::svg::render_svg;

pub const PAGE_FILE: &str = "leaderboard.html";
pub const CHART_FILE: &str = "chart.svg";
pub const POINTS_FILE: &str = "chart_points.json";
pub const TABLE_FILE: &str = "leaderboard.tsv";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the page plus the artifacts of every path that rendered.
/// Returns the written files in write order.
pub fn write_reports(outcome: &PageOutcome, out_dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let mut written = Vec::new();

    let chart = match &outcome.chart {
        ChartOutcome::Rendered(frames) => ChartSection::Rendered {
            light: &frames.light,
            dark: &frames.dark,
        },
        ChartOutcome::Failed => ChartSection::Fallback,
    };
    let table = match &outcome.table {
        TableOutcome::Rendered(rows) => TableSection::Rendered(rows),
        TableOutcome::Failed => TableSection::Fallback,
    };
    let page_path = out_dir.join(PAGE_FILE);
    write_text(&page_path, &render_page(&chart, &table))?;
    written.push(page_path);

    if let ChartOutcome::Rendered(frames) = &outcome.chart {
        let svg_path = out_dir.join(CHART_FILE);
        write_text(&svg_path, &render_svg(&frames.selected))?;
        written.push(svg_path);

        let points_path = out_dir.join(POINTS_FILE);
        let json = serde_json::to_string_pretty(&frames.points)?;
        write_text(&points_path, &json)?;
        written.push(points_path);
    }

    if let TableOutcome::Rendered(rows) = &outcome.table {
        let tsv_path = out_dir.join(TABLE_FILE);
        write_table_tsv(rows, &tsv_path)?;
        written.push(tsv_path);
    }

    for path in &written {
        info!(path = %path.display(), "wrote report");
    }
    Ok(written)
}

fn write_table_tsv(rows: &[RankedRow], path: &Path) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    let header = [
        "rank",
        "model",
        "seed",
        "average_score",
        "adversarial_score",
        "benign_score",
    ]
    .join("\t");
    writeln!(w, "{}", header).map_err(io_err)?;
    for ranked in rows {
        let row = &ranked.row;
        let fields = [
            ranked.rank.to_string(),
            sanitize_field(&row.model),
            sanitize_field(&row.seed),
            format!("{:.6}", row.average_score),
            format!("{:.6}", row.adversarial_score),
            format!("{:.6}", row.benign_score),
        ];
        writeln!(w, "{}", fields.join("\t")).map_err(io_err)?;
    }
    w.flush().map_err(io_err)?;
    Ok(())
}

fn sanitize_field(raw: &str) -> String {
    raw.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    w.write_all(contents.as_bytes()).map_err(io_err)?;
    w.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
