//! End-to-end runs of the two stages, as driven by the binaries
//!
//! Each run prints a banner and progress to stdout and returns a
//! `StageOutcome` instead of an error. Failures never escape as panics.

use std::path::Path;

use chrono::{DateTime, Local};
use tracing::{error, info, instrument};

use crate::extractor::summary::DEFAULT_PREVIEW_LIMIT;
use crate::extractor::{ExtractionSummary, ExtractorConfig, preview_lines, scrape_countries_or_empty};
use crate::report::format::group_thousands;
use crate::report::{ReportConfig, ReportStats, render_report, write_report};
use crate::storage::{load_records_or_empty, save_records};

const RULE_WIDTH: usize = 60;

/// How a stage run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// All steps ran; `bytes` is the size of the written file
    Completed { records: usize, bytes: u64 },

    /// Nothing to do; no file was written
    Skipped(String),

    /// A step failed after the stage started producing output
    Failed(String),
}

impl StageOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StageOutcome::Completed { .. })
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn print_banner(title: &str) {
    println!("{}", rule());
    println!("{}", title);
    println!("{}", rule());
}

/// Scrape the source page and save the records to `output_path`
#[instrument(skip(config, output_path), fields(url = %config.url))]
pub async fn run_extract(config: &ExtractorConfig, output_path: &Path) -> StageOutcome {
    print_banner("COUNTRY EXTRACTOR");

    let records = scrape_countries_or_empty(config).await;
    if records.is_empty() {
        println!("Could not get any data. Exiting.");
        return StageOutcome::Skipped("no countries extracted".to_string());
    }

    println!("\nFirst {} countries in the list:", DEFAULT_PREVIEW_LIMIT);
    println!("{}", rule());
    for line in preview_lines(&records, DEFAULT_PREVIEW_LIMIT) {
        println!("{}", line);
    }

    let saved = match save_records(output_path, &records).await {
        Ok(bytes) => {
            println!("✓ Data saved to file: {}", output_path.display());
            println!("  File size: {} bytes", bytes);
            Ok(bytes)
        }
        Err(e) => {
            error!("Failed to save {}: {}", output_path.display(), e);
            println!("✗ Failed to save JSON: {}", e);
            Err(e.to_string())
        }
    };

    println!("\n{}", ExtractionSummary::from_records(&records));

    println!("\n{}", rule());
    match saved {
        Ok(bytes) => {
            println!("Extraction finished successfully!");
            println!("Run `report` to build the HTML page");
            println!("{}", rule());
            info!("Extracted {} countries", records.len());
            StageOutcome::Completed {
                records: records.len(),
                bytes,
            }
        }
        Err(message) => {
            println!("Extraction finished, but the data file was not written.");
            println!("{}", rule());
            StageOutcome::Failed(message)
        }
    }
}

/// Load the data file named in `config` and write the HTML report.
///
/// No document is written when there is nothing to report.
#[instrument(skip(config, now))]
pub async fn run_report(config: &ReportConfig, now: DateTime<Local>) -> StageOutcome {
    print_banner("COUNTRY REPORT GENERATOR");

    let records = load_records_or_empty(&config.input_path).await;
    if records.is_empty() {
        println!("✗ No data in {}", config.input_path.display());
        println!("\nRun the extractor first:");
        println!("  extract");
        return StageOutcome::Skipped(format!(
            "no records in {}",
            config.input_path.display()
        ));
    }
    println!(
        "✓ Loaded {} countries from {}",
        records.len(),
        config.input_path.display()
    );

    println!("\nGenerating HTML page...");
    let stats = ReportStats::from_records(&records);
    let html = render_report(&records, &stats, config, &now);

    let output = &config.output_path;
    match write_report(output, &html).await {
        Ok(bytes) => {
            println!("✓ HTML page saved to file: {}", output.display());
            println!("  File size: {} bytes", group_thousands(bytes));
            println!("  Open {} in a browser to view it", output.display());
            println!("\n{}", rule());
            println!("✓ HTML page created successfully!");
            println!("{}", rule());
            info!("Rendered {} countries", records.len());
            StageOutcome::Completed {
                records: records.len(),
                bytes,
            }
        }
        Err(e) => {
            error!("Failed to write {}: {}", output.display(), e);
            println!("✗ Failed to save HTML: {}", e);
            StageOutcome::Failed(e.to_string())
        }
    }
}
