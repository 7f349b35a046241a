// src/error.rs

//! Unified error handling for the job search tool.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Every variant aborts the run; missing optional fields inside a
/// successfully decoded listing degrade to empty values instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// Session bootstrap did not yield the expected CSRF cookie
    #[error("Bootstrap error: {0}")]
    Bootstrap(String),

    /// Retry budget exhausted on a transient network/server failure
    #[error("Transient fetch error on page {page}: {message} (gave up after {attempts} attempts)")]
    TransientFetch {
        page: u32,
        attempts: u32,
        message: String,
    },

    /// Non-retryable HTTP error status
    #[error("Fetch error on page {page}: server returned {status}")]
    Fetch { page: u32, status: StatusCode },

    /// Response body did not match the expected JSON shape
    #[error("Malformed response on page {page}: {source}")]
    MalformedResponse {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a bootstrap error.
    pub fn bootstrap(message: impl Into<String>) -> Self {
        Self::Bootstrap(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a malformed-response error for a page.
    pub fn malformed(page: u32, source: serde_json::Error) -> Self {
        Self::MalformedResponse { page, source }
    }
}
