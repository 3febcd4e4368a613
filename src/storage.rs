//! Reading and writing the intermediate data file
//!
//! The data file is a pretty-printed JSON array of country records. It is the
//! only thing the extractor and the reporter share.

use std::{io, path::Path};

use tokio::fs;
use tracing::{debug, error, warn};

use crate::record::CountryRecord;

/// Default location of the intermediate data file
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

type Result<T> = std::result::Result<T, StorageError>;

/// Write all records to `path`, replacing any previous contents.
///
/// Non-ASCII text is written as-is. Returns the size of the written file in
/// bytes.
pub async fn save_records(path: impl AsRef<Path>, records: &[CountryRecord]) -> Result<u64> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).await?;

    let size = fs::metadata(path).await?.len();
    debug!("Wrote {} records ({} bytes) to {}", records.len(), size, path.display());
    Ok(size)
}

/// Load records from `path` in the order they were written
pub async fn load_records(path: impl AsRef<Path>) -> Result<Vec<CountryRecord>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let records: Vec<CountryRecord> = serde_json::from_str(&content)?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Like `load_records`, but failures are logged with a hint to run the
/// extractor and an empty list is returned.
pub async fn load_records_or_empty(path: impl AsRef<Path>) -> Vec<CountryRecord> {
    let path = path.as_ref();
    match load_records(path).await {
        Ok(records) => records,
        Err(StorageError::NotFound(p)) => {
            warn!("File {} not found. Run the extractor first: `extract`", p);
            Vec::new()
        }
        Err(e) => {
            error!("Failed to read data file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
