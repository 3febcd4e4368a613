//! # Country Atlas - scrape a country list and publish it as a report
//!
//! A two-stage batch pipeline. The extractor fetches a single page listing
//! countries, turns each country card into a [`CountryRecord`] and saves the
//! list as JSON. The reporter loads that file and renders a standalone HTML
//! page with a summary header and one table row per country.
//!
//! ## Features
//!
//! - Lenient per-field parsing: a card never fails, missing values degrade to
//!   documented defaults
//! - Stable JSON data file shared by both stages
//! - Self-contained HTML report with inline styling and a reveal animation
//! - Structured logging with `tracing`
//!
//! ## Example
//!
//! ```rust,no_run
//! use country_atlas::extractor::{ExtractorConfig, scrape_countries};
//! use country_atlas::report::{ReportConfig, ReportStats, render_report};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> country_atlas::Result<()> {
//!     let records = scrape_countries(&ExtractorConfig::default()).await?;
//!     let stats = ReportStats::from_records(&records);
//!     let html = render_report(&records, &stats, &ReportConfig::default(), &chrono::Local::now());
//!     println!("{} bytes of HTML", html.len());
//!     Ok(())
//! }
//! ```

mod error;
mod record;

pub mod extractor;
pub mod pipeline;
pub mod report;
pub mod storage;
pub mod telemetry;

pub use error::{Error, Result};
pub use record::{CountryRecord, UNKNOWN};
