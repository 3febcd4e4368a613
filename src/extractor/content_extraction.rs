//! Turning the fetched HTML into country records

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::extractor::ExtractorConfig;
use crate::extractor::error::ExtractError;
use crate::record::{CountryRecord, UNKNOWN};

/// Compiled selectors for a card and its four fields
#[derive(Debug, Clone)]
pub struct CardSelectors {
    pub card: Selector,
    pub name: Selector,
    pub capital: Selector,
    pub population: Selector,
    pub area: Selector,
}

fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

impl CardSelectors {
    /// Compile the selectors named in the configuration
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            card: compile(&config.card_selector)?,
            name: compile(&config.name_selector)?,
            capital: compile(&config.capital_selector)?,
            population: compile(&config.population_selector)?,
            area: compile(&config.area_selector)?,
        })
    }
}

/// Parse every card in the document, in document order
///
/// # Arguments
///
/// * `html` - The page body
/// * `selectors` - Compiled card and field selectors
///
/// # Returns
///
/// One record per card; an unexpected page shape just yields fewer records
pub fn parse_countries(html: &str, selectors: &CardSelectors) -> Vec<CountryRecord> {
    let document = Html::parse_document(html);

    let records: Vec<CountryRecord> = document
        .select(&selectors.card)
        .map(|card| parse_card(card, selectors))
        .collect();

    debug!("Parsed {} cards", records.len());
    records
}

/// Project a single card element into a record.
///
/// Every lookup is optional: a missing element falls back to the field
/// default instead of dropping the record.
pub fn parse_card(card: ElementRef<'_>, selectors: &CardSelectors) -> CountryRecord {
    let name = field_text(card, &selectors.name).unwrap_or_else(|| UNKNOWN.to_string());
    let capital = field_text(card, &selectors.capital).unwrap_or_else(|| UNKNOWN.to_string());
    let population = field_text(card, &selectors.population)
        .map(|text| parse_population(&text))
        .unwrap_or(0);
    let area = field_text(card, &selectors.area)
        .map(|text| parse_area(&text))
        .unwrap_or(0.0);

    CountryRecord {
        name,
        capital,
        population,
        area,
    }
}

/// Trimmed text of the first element matching `selector` inside `card`
fn field_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Parse a population count.
///
/// Only a non-empty run of ASCII digits is accepted; anything else,
/// including a sign or a value that does not fit in `u64`, yields `0`.
pub fn parse_population(text: &str) -> u64 {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    text.parse().unwrap_or(0)
}

/// Parse an area in square kilometres.
///
/// Accepted when removing at most one `.` leaves a non-empty run of ASCII
/// digits. Anything else, including a value too large to be finite,
/// yields `0.0`.
pub fn parse_area(text: &str) -> f64 {
    let digits = text.replacen('.', "", 1);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 0.0;
    }
    text.parse::<f64>()
        .ok()
        .filter(|area| area.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> CardSelectors {
        CardSelectors::from_config(&ExtractorConfig::default()).unwrap()
    }

    const PAGE: &str = r#"
        <html><body>
        <div class="row">
            <div class="col-md-4 country">
                <h3 class="country-name"><i class="flag-icon flag-icon-ad"></i>
                    Andorra
                </h3>
                <div class="country-info">
                    <strong>Capital:</strong> <span class="country-capital">Andorra la Vella</span><br>
                    <strong>Population:</strong> <span class="country-population">84000</span><br>
                    <strong>Area (km<sup>2</sup>):</strong> <span class="country-area">468.0</span><br>
                </div>
            </div>
            <div class="col-md-4 country">
                <h3 class="country-name">Åland</h3>
                <div class="country-info">
                    <span class="country-population">n/a</span>
                    <span class="country-area">1580.5.1</span>
                </div>
            </div>
            <div class="col-md-4 country">
                <h3 class="country-name">United Arab Emirates</h3>
                <span class="country-capital">Abu Dhabi</span>
                <span class="country-population">4975593</span>
                <span class="country-area">82880.0</span>
            </div>
            <div class="col-md-4 sidebar">
                <h3 class="country-name">Not a country</h3>
            </div>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_countries_document_order() {
        let records = parse_countries(PAGE, &selectors());

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Andorra");
        assert_eq!(records[1].name, "Åland");
        assert_eq!(records[2].name, "United Arab Emirates");
    }

    #[test]
    fn test_parse_card_full() {
        let records = parse_countries(PAGE, &selectors());
        assert_eq!(
            records[0],
            CountryRecord::new("Andorra", "Andorra la Vella", 84000, 468.0)
        );
    }

    #[test]
    fn test_parse_card_degrades_per_field() {
        let records = parse_countries(PAGE, &selectors());
        let aland = &records[1];

        assert_eq!(aland.name, "Åland");
        assert_eq!(aland.capital, UNKNOWN);
        assert_eq!(aland.population, 0);
        assert_eq!(aland.area, 0.0);
    }

    #[test]
    fn test_parse_empty_card() {
        let html = r#"<div class="col-md-4 country"></div>"#;
        let records = parse_countries(html, &selectors());
        assert_eq!(records, vec![CountryRecord::default()]);
    }

    #[test]
    fn test_parse_unexpected_document() {
        let records = parse_countries("<html><p>maintenance</p></html>", &selectors());
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_population() {
        assert_eq!(parse_population("123"), 123);
        assert_eq!(parse_population(""), 0);
        assert_eq!(parse_population("-5"), 0);
        assert_eq!(parse_population("abc"), 0);
        assert_eq!(parse_population("12.5"), 0);
        assert_eq!(parse_population("99999999999999999999999"), 0);
    }

    #[test]
    fn test_parse_area() {
        assert_eq!(parse_area("12.5"), 12.5);
        assert_eq!(parse_area("468"), 468.0);
        assert_eq!(parse_area("12.5.6"), 0.0);
        assert_eq!(parse_area("abc"), 0.0);
        assert_eq!(parse_area(""), 0.0);
        assert_eq!(parse_area("."), 0.0);
        assert_eq!(parse_area("-1.0"), 0.0);
        assert_eq!(parse_area("1e5"), 0.0);
    }

    #[test]
    fn test_parse_area_out_of_range() {
        assert_eq!(parse_area(&"9".repeat(400)), 0.0);
        assert_eq!(parse_area(&format!("{}.5", "9".repeat(400))), 0.0);
    }

    #[test]
    fn test_invalid_selector() {
        let config = ExtractorConfig::builder().card_selector("div[").build();
        let result = CardSelectors::from_config(&config);
        assert!(matches!(result, Err(ExtractError::Selector { .. })));
    }
}
