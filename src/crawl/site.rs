// src/crawl/site.rs
// =============================================================================
// The crawl loop.
//
// How it works:
// 1. Stop if the page budget is reached
// 2. Pop the next URL off the frontier (stop if there is none)
// 3. Fetch and extract it
// 4. On success, keep the record and offer its links to the frontier
// 5. On failure, log it and move on; the URL is never tried again
//
// Only one request is in flight at a time. There is no retry, no delay and
// no concurrency; the loop owns the frontier and the results outright.
// =============================================================================

use anyhow::Result;
use tracing::{debug, info, warn};

use super::frontier::Frontier;
use crate::config::CrawlConfig;
use crate::fetch::{fetch_page, FetchError, Transport};
use crate::page::PageRecord;

/// A URL that produced no record, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFetch {
    pub url: String,
    pub error: FetchError,
}

/// Everything a finished crawl produced.
#[derive(Debug, Default)]
pub struct CrawlReport {
    /// Records in the order their pages were fetched
    pub pages: Vec<PageRecord>,
    pub failures: Vec<FailedFetch>,
}

/// Crawls breadth-first from the configured seed until the frontier runs dry
/// or `max_pages` records exist.
///
/// Per-page failures never end the crawl. The only error returned is an
/// unusable configuration, detected before the first request.
pub async fn crawl_site(transport: &dyn Transport, config: &CrawlConfig) -> Result<CrawlReport> {
    let scope = config.site_scope()?;
    let mut frontier = Frontier::new(config.seed_url.as_str(), config.include.as_str());
    let mut report = CrawlReport::default();

    info!(
        seed = %config.seed_url,
        include = %config.include,
        origin = %scope.origin,
        max_pages = config.max_pages,
        "starting crawl"
    );

    while report.pages.len() < config.max_pages {
        let Some(url) = frontier.next_candidate() else {
            break;
        };

        info!(page = report.pages.len() + 1, url = %url, "crawling");

        match fetch_page(transport, &url, &config.headers, &scope).await {
            Ok(record) => {
                debug_assert!(frontier.is_visited(&record.url));

                let queued = frontier.offer_links(&record.links);
                debug!(
                    url = %url,
                    links = record.links.len(),
                    queued,
                    pending = frontier.pending_len(),
                    "extracted page"
                );

                report.pages.push(record);
            }
            Err(error) => {
                warn!(url = %url, error = %error, "failed to fetch page");
                report.failures.push(FailedFetch { url, error });
            }
        }
    }

    info!(
        pages = report.pages.len(),
        failures = report.failures.len(),
        visited = frontier.visited_len(),
        pending = frontier.pending_len(),
        "crawl finished"
    );

    Ok(report)
}
