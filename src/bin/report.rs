//! # Reporter CLI
//!
//! Reads the data file written by `extract` and renders it as a standalone
//! HTML page.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use country_atlas::extractor::DEFAULT_SOURCE_URL;
use country_atlas::pipeline::run_report;
use country_atlas::report::{DEFAULT_REPORT_PATH, ReportConfig};
use country_atlas::storage::DEFAULT_DATA_PATH;
use country_atlas::telemetry;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the country data file as an HTML report", long_about = None)]
struct Cli {
    /// Data file written by `extract`
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    input: PathBuf,

    /// HTML file to write
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Attribution link in the page footer
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    source_url: String,

    /// Page title
    #[arg(short, long)]
    title: Option<String>,

    /// Exit with a non-zero status when the run does not complete
    #[arg(long)]
    strict: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init_tracing_subscriber()?;

    let mut builder = ReportConfig::builder()
        .input_path(cli.input)
        .output_path(cli.output)
        .source_url(cli.source_url);
    if let Some(title) = cli.title {
        builder = builder.title(title);
    }
    let config = builder.build();

    let outcome = run_report(&config, chrono::Local::now()).await;

    if cli.strict && !outcome.is_success() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
