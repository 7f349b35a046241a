// src/pipeline/run.rs

//! Search run controller.

use crate::config::Config;
use crate::error::Result;
use crate::models::OutputRow;
use crate::services::{ListingFilter, PageFetcher, Session, project};
use crate::storage::CsvSink;

/// Totals for a completed run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub pages_fetched: u32,
    pub total_pages: u32,
    pub listings_seen: usize,
    pub matches_written: usize,
}

/// Drive a full search run: bootstrap once, then fetch, filter, and write
/// page by page until the server-reported total or the caller's cap.
pub async fn run_search(config: &Config, max_pages: Option<u32>) -> Result<RunSummary> {
    let session = Session::bootstrap(&config.http).await?;
    log::info!("Session established against {}", config.http.api_url);

    let fetcher = PageFetcher::new(config.search.clone(), config.http.retry.clone());
    let keyword_filter = ListingFilter::new(&config.filter);
    let sink = CsvSink::new(&config.output.path);

    let mut summary = RunSummary::default();
    // Fixed by the first response; later drift in the server-reported
    // total does not move it.
    let mut stop_page: Option<u32> = None;
    let mut page: u32 = 1;

    loop {
        if stop_page.is_none() && max_pages.is_some_and(|cap| page > cap) {
            break;
        }

        let result = fetcher.fetch(&session, page).await?;

        let stop = match stop_page {
            Some(stop) => stop,
            None => {
                summary.total_pages = fetcher.total_pages(result.number_records);
                let stop = effective_stop_page(summary.total_pages, max_pages);
                log::info!(
                    "{} records reported, {} pages total, stopping after page {}",
                    result.number_records,
                    summary.total_pages,
                    stop
                );
                stop_page = Some(stop);
                stop
            }
        };

        let rows: Vec<OutputRow> = keyword_filter
            .filter(&result.jvs)
            .into_iter()
            .map(project)
            .collect();
        sink.write_page(&rows, page == 1)?;

        summary.pages_fetched += 1;
        summary.listings_seen += result.jvs.len();
        summary.matches_written += rows.len();
        log::info!(
            "Page {page}: {} listings scanned, {} matched",
            result.jvs.len(),
            rows.len()
        );

        page += 1;
        if page > stop {
            break;
        }
    }

    Ok(summary)
}

/// The last page to fetch: the server-derived total, clamped by the
/// caller's cap when one is given.
fn effective_stop_page(total_pages: u32, max_pages: Option<u32>) -> u32 {
    max_pages.map_or(total_pages, |cap| cap.min(total_pages))
}
