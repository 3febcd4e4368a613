//! # Country Report Module
//!
//! Second stage of the pipeline: turn the loaded records into a standalone
//! HTML page with summary statistics in the header and one table row per
//! country.
//!
//! ## Key Components
//!
//! - `ReportConfig`: input/output paths and attribution settings
//! - `ReportStats`: count, total and average population
//! - `render_report`: builds the document
//! - `write_report`: writes it to disk and reports its size

pub mod aggregate;
pub mod format;
mod render;

pub use aggregate::ReportStats;
pub use render::{TIMESTAMP_FORMAT, render_report};

use std::{io, path::Path, path::PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::extractor::DEFAULT_SOURCE_URL;
use crate::storage::DEFAULT_DATA_PATH;

/// Default location of the generated report
pub const DEFAULT_REPORT_PATH: &str = "index.html";

/// Error type for report operations
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration for the reporter
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Intermediate data file to read
    pub input_path: PathBuf,

    /// Where the HTML document is written
    pub output_path: PathBuf,

    /// Link target in the attribution footer
    pub source_url: String,

    /// Link text in the attribution footer
    pub source_label: String,

    /// Page title and main heading
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_DATA_PATH),
            output_path: PathBuf::from(DEFAULT_REPORT_PATH),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            source_label: "ScrapeThisSite.com".to_string(),
            title: "Countries of the World".to_string(),
        }
    }
}

/// Builder for ReportConfig
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ReportConfig::default(),
        }
    }

    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.config.source_url = url.into();
        self
    }

    pub fn source_label(mut self, label: impl Into<String>) -> Self {
        self.config.source_label = label.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ReportConfig {
        self.config
    }
}

impl ReportConfig {
    /// Create a new builder
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::new()
    }
}

/// Write the rendered document to `path`, replacing any previous file.
///
/// Returns the size of the written file in bytes.
pub async fn write_report(path: impl AsRef<Path>, html: &str) -> Result<u64, ReportError> {
    let path = path.as_ref();
    fs::write(path, html).await?;
    let size = fs::metadata(path).await?.len();
    debug!("Wrote report ({} bytes) to {}", size, path.display());
    Ok(size)
}
