use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

pub mod fetch;
pub mod file;
pub mod summary;

use summary::ScoresSummary;

pub const DEFAULT_SUMMARY_PATH: &str = "model_scores_summary.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarySource {
    Url(String),
    File(PathBuf),
}

impl SummarySource {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            SummarySource::Url(raw.to_string())
        } else {
            SummarySource::File(PathBuf::from(raw))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SummarySource::Url(url) => url.clone(),
            SummarySource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    Network,
    Parse,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: HTTP {status} from {url}")]
    Network { url: String, status: u16 },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Network { .. } | LoadError::Transport(_) | LoadError::Io { .. } => {
                LoadErrorKind::Network
            }
            LoadError::Parse(_) => LoadErrorKind::Parse,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

pub async fn load_summary(
    source: &SummarySource,
    options: &LoadOptions,
) -> Result<ScoresSummary, LoadError> {
    let bytes = match source {
        SummarySource::Url(url) => fetch::fetch_bytes(url, options.timeout).await?,
        SummarySource::File(path) => file::read_maybe_gz(path)?,
    };
    let summary = parse_summary(&bytes)?;
    info!(
        source = %source.describe(),
        models = summary.models.len(),
        reports = summary.total_reports(),
        "loaded score summary"
    );
    Ok(summary)
}

pub fn parse_summary(bytes: &[u8]) -> Result<ScoresSummary, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
