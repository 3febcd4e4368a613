//! # Extractor Configuration Module
//!
//! Configuration for fetching the source page and locating the country cards
//! in it. Follows the builder pattern so the binary can override only the
//! values given on the command line.
//!
//! ## Key Components
//!
//! - `ExtractorConfig`: source URL, user agent and CSS selectors
//! - `ExtractorConfigBuilder`: builder for `ExtractorConfig`

/// Page the country list is scraped from
pub const DEFAULT_SOURCE_URL: &str = "https://www.scrapethissite.com/pages/simple/";

/// Browser-like user agent sent with the request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Configuration for the extractor
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// URL of the page to scrape
    pub url: String,

    /// User agent to use for the request
    pub user_agent: String,

    /// CSS selector matching one card per country
    pub card_selector: String,

    /// CSS selector for the country name inside a card
    pub name_selector: String,

    /// CSS selector for the capital inside a card
    pub capital_selector: String,

    /// CSS selector for the population inside a card
    pub population_selector: String,

    /// CSS selector for the area inside a card
    pub area_selector: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            card_selector: "div.col-md-4.country".to_string(),
            name_selector: "h3.country-name".to_string(),
            capital_selector: "span.country-capital".to_string(),
            population_selector: "span.country-population".to_string(),
            area_selector: "span.country-area".to_string(),
        }
    }
}

/// Builder for ExtractorConfig
#[derive(Debug, Default)]
pub struct ExtractorConfigBuilder {
    config: ExtractorConfig,
}

impl ExtractorConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ExtractorConfig::default(),
        }
    }

    /// Set the URL to scrape
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Set the user agent to use for the request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the CSS selector for country cards
    pub fn card_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.card_selector = selector.into();
        self
    }

    /// Set the CSS selector for the country name inside a card
    pub fn name_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.name_selector = selector.into();
        self
    }

    /// Set the CSS selector for the capital inside a card
    pub fn capital_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.capital_selector = selector.into();
        self
    }

    /// Set the CSS selector for the population inside a card
    pub fn population_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.population_selector = selector.into();
        self
    }

    /// Set the CSS selector for the area inside a card
    pub fn area_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.area_selector = selector.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ExtractorConfig {
        self.config
    }
}

impl ExtractorConfig {
    /// Create a new builder
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::new()
    }
}
