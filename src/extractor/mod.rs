//! # Country Extractor Module
//!
//! First stage of the pipeline: fetch the source page once, find every
//! country card in it and project each card into a `CountryRecord`.
//!
//! ## Key Components
//!
//! - `ExtractorConfig`: source URL, user agent and card selectors
//! - `scrape_countries`: fetch and parse, returning a typed error
//! - `scrape_countries_or_empty`: the same, but logs failures and yields an
//!   empty list
//! - `parse_population` / `parse_area`: lenient numeric normalization
//!
//! There is no retry and no crawling past the one page.

mod config;
mod content_extraction;
mod error;
mod fetch;
pub mod summary;

pub use config::{DEFAULT_SOURCE_URL, DEFAULT_USER_AGENT, ExtractorConfig, ExtractorConfigBuilder};
pub use content_extraction::{CardSelectors, parse_area, parse_card, parse_countries, parse_population};
pub use error::ExtractError;
pub use fetch::{build_client, fetch_page};
pub use summary::{ExtractionSummary, preview_lines};

use tracing::{error, info, instrument};
use url::Url;

use crate::record::CountryRecord;

/// Fetch the configured page and extract all country records
///
/// # Arguments
///
/// * `config` - The extractor configuration
///
/// # Returns
///
/// Records in document order
#[instrument(skip(config), fields(url = %config.url))]
pub async fn scrape_countries(config: &ExtractorConfig) -> Result<Vec<CountryRecord>, ExtractError> {
    Url::parse(&config.url)?;
    let selectors = CardSelectors::from_config(config)?;
    let client = build_client()?;

    info!("Loading page {}", config.url);
    let html = fetch_page(&client, config).await?;

    info!("Parsing data");
    let records = parse_countries(&html, &selectors);

    info!("Found {} countries", records.len());
    Ok(records)
}

/// Like `scrape_countries`, but any failure is logged and turned into an
/// empty list.
pub async fn scrape_countries_or_empty(config: &ExtractorConfig) -> Vec<CountryRecord> {
    match scrape_countries(config).await {
        Ok(records) => records,
        Err(ExtractError::Http(e)) => {
            error!("Failed to load page: {}", e);
            Vec::new()
        }
        Err(e) => {
            error!("Failed to extract countries: {}", e);
            Vec::new()
        }
    }
}
