//! The country record shared by the extractor and the reporter

use serde::{Deserialize, Serialize};

/// Placeholder used when a card has no name or capital element
pub const UNKNOWN: &str = "Unknown";

/// One country as scraped from a card on the source page.
///
/// This is the shape of every object in the intermediate JSON file. The
/// serialized keys are `country`, `capital`, `population` and `area`, and both
/// stages must agree on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Country name
    #[serde(rename = "country")]
    pub name: String,

    /// Capital city
    pub capital: String,

    /// Population, `0` when unknown
    pub population: u64,

    /// Area in square kilometres, `0.0` when unknown
    pub area: f64,
}

impl Default for CountryRecord {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            capital: UNKNOWN.to_string(),
            population: 0,
            area: 0.0,
        }
    }
}

impl CountryRecord {
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        population: u64,
        area: f64,
    ) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
            population,
            area,
        }
    }
}
