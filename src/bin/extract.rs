//! # Extractor CLI
//!
//! Fetches the country list page and writes the records to a JSON data file
//! for the `report` binary to pick up.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use country_atlas::extractor::{DEFAULT_SOURCE_URL, DEFAULT_USER_AGENT, ExtractorConfig};
use country_atlas::pipeline::run_extract;
use country_atlas::storage::DEFAULT_DATA_PATH;
use country_atlas::telemetry;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape the country list into a JSON data file", long_about = None)]
struct Cli {
    /// Page to scrape
    #[arg(short, long, default_value = DEFAULT_SOURCE_URL)]
    url: String,

    /// User agent sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Data file to write
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    output: PathBuf,

    /// Exit with a non-zero status when the run does not complete
    #[arg(long)]
    strict: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init_tracing_subscriber()?;

    let config = ExtractorConfig::builder()
        .url(cli.url)
        .user_agent(cli.user_agent)
        .build();

    let outcome = run_extract(&config, &cli.output).await;

    if cli.strict && !outcome.is_success() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
