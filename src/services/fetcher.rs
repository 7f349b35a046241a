// src/services/fetcher.rs

//! Paginated search fetcher.
//!
//! Issues one POST per page with the fixed search payload, retrying
//! transient failures with exponential backoff.

use reqwest::Response;

use crate::config::{RetryConfig, SearchConfig};
use crate::error::{AppError, Result};
use crate::models::{PageResult, SearchRequest};
use crate::services::Session;

/// Fetches one page of search results per call.
pub struct PageFetcher {
    search: SearchConfig,
    retry: RetryConfig,
}

impl PageFetcher {
    /// Create a fetcher with the given search payload and retry policy.
    pub fn new(search: SearchConfig, retry: RetryConfig) -> Self {
        Self { search, retry }
    }

    /// Fetch a single 1-based page of results.
    ///
    /// Errors: [`AppError::TransientFetch`] when the retry budget is
    /// exhausted, [`AppError::Fetch`] on a non-retryable error status, and
    /// [`AppError::MalformedResponse`] when the body is not the expected
    /// JSON shape.
    pub async fn fetch(&self, session: &Session, page: u32) -> Result<PageResult> {
        let body = SearchRequest::new(&self.search, page, session.session_id());
        let response = self.post_with_retry(session, &body, page).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch { page, status });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| AppError::malformed(page, source))
    }

    /// Total page count implied by the first page's record count.
    pub fn total_pages(&self, number_records: u64) -> u32 {
        let per_page = u64::from(self.search.results_per_page.max(1));
        number_records.div_ceil(per_page) as u32
    }

    /// Issue the search POST, retrying transport errors and retryable
    /// statuses. Retrying a POST is safe here: the endpoint is idempotent
    /// for identical search bodies.
    async fn post_with_retry(
        &self,
        session: &Session,
        body: &SearchRequest,
        page: u32,
    ) -> Result<Response> {
        let max = self.retry.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let result = session
                .client()
                .post(session.api_url().clone())
                .json(body)
                .send()
                .await;

            let failure = match result {
                Ok(response) if self.retry.is_retryable(response.status()) => {
                    format!("server returned {}", response.status())
                }
                Ok(response) => return Ok(response),
                Err(error) => error.to_string(),
            };

            if attempt >= max {
                return Err(AppError::TransientFetch {
                    page,
                    attempts: max,
                    message: failure,
                });
            }

            let delay = self.retry.backoff_delay(attempt);
            log::warn!(
                "Page {page} attempt {attempt}/{max} failed ({failure}), retrying in {}s",
                delay.as_secs_f64()
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> PageFetcher {
        PageFetcher::new(SearchConfig::default(), RetryConfig::default())
    }

    #[test]
    fn total_pages_rounds_up() {
        let fetcher = fetcher();
        assert_eq!(fetcher.total_pages(120), 3);
        assert_eq!(fetcher.total_pages(101), 3);
        assert_eq!(fetcher.total_pages(100), 2);
        assert_eq!(fetcher.total_pages(1), 1);
    }

    #[test]
    fn total_pages_of_empty_result_is_zero() {
        assert_eq!(fetcher().total_pages(0), 0);
    }
}
