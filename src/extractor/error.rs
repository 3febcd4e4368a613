//! Error types for the extractor module

use thiserror::Error;

/// Error type for extractor operations
#[derive(Debug, Error)]
pub enum ExtractError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// A configured CSS selector could not be parsed
    #[error("Invalid selector '{selector}': {message}")]
    Selector {
        /// The selector text
        selector: String,
        /// Parser message
        message: String,
    },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}
