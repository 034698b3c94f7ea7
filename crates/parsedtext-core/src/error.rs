//! Error types for parsedtext

use thiserror::Error;

/// Main error type for parsedtext operations
#[derive(Error, Debug)]
pub enum ParsedTextError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error (unknown named pattern, missing pattern, bad config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A supplied pattern could not be compiled by the regex engine
    #[error("Malformed pattern `{pattern}`: {source}")]
    MalformedPattern {
        /// The pattern source as given by the caller
        pattern: String,
        /// The underlying regex compile error
        #[source]
        source: regex::Error,
    },
}

impl ParsedTextError {
    /// Shorthand for building a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether this error reports a caller configuration defect.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Result type alias for parsedtext operations
pub type Result<T> = std::result::Result<T, ParsedTextError>;
