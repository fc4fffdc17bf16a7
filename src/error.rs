//! Custom error types for arxtrend.
//!
//! All fallible functions return `Result<T, ArxtrendError>` instead of using
//! `unwrap()`. A transport failure is deliberately a distinct variant from
//! the empty-page exhaustion signal (see [`crate::fetch::Page`]).

use thiserror::Error;

/// Main error type for arxtrend operations.
///
/// Uses `thiserror` for ergonomic error handling and automatic `Display` implementation.
#[derive(Debug, Error)]
pub enum ArxtrendError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Atom feed document could not be parsed
    #[error("Feed error: {0}")]
    Feed(String),

    /// External API returned an error status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code from the API
        code: i32,
        /// Error message from the API
        message: String,
    },

    /// Rate limited by the remote service
    #[error("Rate limited, retry after {0}s")]
    RateLimited(u64),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Chart rendering error
    #[error("Chart error: {0}")]
    Chart(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using `ArxtrendError`
pub type Result<T> = std::result::Result<T, ArxtrendError>;
