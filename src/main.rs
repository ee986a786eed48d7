mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use crate::input::{DEFAULT_SUMMARY_PATH, LoadOptions, SummarySource};
use crate::model::theme::Theme;
use crate::pipeline::page::{PageRequest, load_page};
use crate::pipeline::stage6_report::{ReportError, write_reports};

#[derive(Debug, Parser)]
#[command(
    name = "kira-leaderboard",
    version,
    about = "Render a model evaluation leaderboard (table and scatter chart) from a JSON score summary"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the summary and write the leaderboard artifacts.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Score summary: http(s) URL or local path (`.gz` is decompressed).
    #[arg(long, default_value = DEFAULT_SUMMARY_PATH)]
    input: String,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Chart container width in pixels.
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Theme used for `chart.svg`.
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// HTTP request timeout.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

impl RunArgs {
    fn page_request(&self) -> PageRequest {
        PageRequest {
            source: SummarySource::parse(&self.input),
            load: LoadOptions {
                timeout: Duration::from_secs(self.timeout_secs),
            },
            width: self.width,
            theme: self.theme,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => match run(&args).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!(error = %err, "failed to write leaderboard");
                ExitCode::FAILURE
            }
        },
    }
}

async fn run(args: &RunArgs) -> Result<(), ReportError> {
    let request = args.page_request();
    info!(
        input = %request.source.describe(),
        out = %args.out.display(),
        width = request.width,
        theme = request.theme.name(),
        "rendering leaderboard"
    );
    let outcome = load_page(&request).await;
    write_reports(&outcome, &args.out)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
