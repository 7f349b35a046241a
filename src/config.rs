// src/config.rs

//! Application configuration structures.
//!
//! Configuration is built in code and handed to the run controller, which
//! keeps endpoints and keyword sets injectable in tests. The keyword list
//! and search payload are fixed for the operator; there is no config file.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP client and retry behavior
    pub http: HttpConfig,

    /// Fixed search payload values
    pub search: SearchConfig,

    /// Description keyword filter
    pub filter: FilterConfig,

    /// Output file settings
    pub output: OutputConfig,
}

impl Config {
    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if Url::parse(&self.http.api_url).is_err() {
            return Err(AppError::config(format!(
                "http.api_url is not a valid URL: {}",
                self.http.api_url
            )));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.retry.max_attempts == 0 {
            return Err(AppError::config("http.retry.max_attempts must be > 0"));
        }
        if !self.http.retry.backoff_factor.is_finite() || self.http.retry.backoff_factor < 0.0 {
            return Err(AppError::config(
                "http.retry.backoff_factor must be a non-negative number",
            ));
        }
        if self.search.results_per_page == 0 {
            return Err(AppError::config("search.results_per_page must be > 0"));
        }
        if self.filter.keywords.is_empty() {
            return Err(AppError::config("No filter keywords defined"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            search: SearchConfig::default(),
            filter: FilterConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// HTTP client and retry behavior settings.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Search endpoint; also the target of the CSRF bootstrap GET
    pub api_url: String,

    /// User-Agent header for all requests
    pub user_agent: String,

    /// Retry policy for the search POST
    pub retry: RetryConfig,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::api_url(),
            user_agent: defaults::user_agent(),
            retry: RetryConfig::default(),
        }
    }
}

/// Retry policy for transient server failures.
///
/// Applied to the search POST only. The endpoint is idempotent for
/// identical search bodies, which is what makes retrying a POST safe here.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts, the first request included
    pub max_attempts: u32,

    /// Base factor for exponential backoff, in seconds
    pub backoff_factor: f64,

    /// HTTP statuses that trigger a retry
    pub retry_statuses: Vec<u16>,
}

impl RetryConfig {
    /// Whether a response status should be retried.
    pub fn is_retryable(&self, status: StatusCode) -> bool {
        self.retry_statuses.contains(&status.as_u16())
    }

    /// Delay before the next attempt: backoff_factor * 2^(attempt - 1),
    /// where `attempt` counts failed attempts starting at 1.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31) as i32;
        Duration::from_secs_f64(self.backoff_factor.max(0.0) * 2f64.powi(exponent))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::max_attempts(),
            backoff_factor: defaults::backoff_factor(),
            retry_statuses: defaults::retry_statuses(),
        }
    }
}

/// Fixed values of the search payload.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Free-text occupation keyword
    pub occupation: String,

    /// Country codes to search in
    pub location_codes: Vec<String>,

    /// Required language and proficiency level
    pub language: LanguageRequirement,

    /// Page size; also the divisor for the total page computation
    pub results_per_page: u32,

    /// Server-side sort order
    pub sort: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            occupation: defaults::occupation(),
            location_codes: defaults::location_codes(),
            language: defaults::language(),
            results_per_page: defaults::results_per_page(),
            sort: defaults::sort(),
        }
    }
}

/// A required language with its proficiency level.
#[derive(Debug, Clone)]
pub struct LanguageRequirement {
    pub iso_code: String,
    pub level: String,
}

/// Description keyword filter settings.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// A listing matches when its description contains any of these,
    /// case-insensitively
    pub keywords: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keywords: defaults::keywords(),
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Path of the CSV file, relative to the working directory
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::output_path(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    use super::LanguageRequirement;

    // HTTP defaults
    pub fn api_url() -> String {
        "https://europa.eu/eures/eures-apps/searchengine/page/jv-search/search".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:142.0) Gecko/20100101 Firefox/142.0".into()
    }

    // Retry defaults
    pub fn max_attempts() -> u32 {
        5
    }
    pub fn backoff_factor() -> f64 {
        1.0
    }
    pub fn retry_statuses() -> Vec<u16> {
        vec![500, 502, 503, 504]
    }

    // Search defaults
    pub fn occupation() -> String {
        "software developer".into()
    }
    pub fn location_codes() -> Vec<String> {
        vec!["de".into(), "fi".into(), "fr".into(), "nl".into()]
    }
    pub fn language() -> LanguageRequirement {
        LanguageRequirement {
            iso_code: "en".into(),
            level: "C2".into(),
        }
    }
    pub fn results_per_page() -> u32 {
        50
    }
    pub fn sort() -> String {
        "BEST_MATCH".into()
    }

    // Filter defaults
    pub fn keywords() -> Vec<String> {
        vec!["relocation assistance".into(), "visa sponsorship".into()]
    }

    // Output defaults
    pub fn output_path() -> PathBuf {
        PathBuf::from("filtered_jobs.csv")
    }
}
