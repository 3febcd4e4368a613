//! Error types for the country_atlas crate

use thiserror::Error;

use crate::extractor::ExtractError;
use crate::report::ReportError;
use crate::storage::StorageError;

/// Result type for country_atlas operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for country_atlas operations
#[derive(Debug, Error)]
pub enum Error {
    /// Fetching or parsing the source page failed
    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),

    /// Reading or writing the intermediate data file failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Rendering or writing the report failed
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// The global tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),
}
