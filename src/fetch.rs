//! arXiv query API client.
//!
//! One network round trip per page against the fixed query endpoint with
//! `search_query`, `start` and `max_results` parameters. A well-formed page
//! with zero entries is the pagination termination signal
//! ([`Page::Exhausted`]); transport and parse failures propagate as errors
//! instead of being conflated with exhaustion.

use crate::error::{ArxtrendError, Result};
use crate::feed::{parse_feed, RawEntry};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// arXiv query API endpoint
const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

/// Outcome of fetching one page of results.
#[derive(Debug)]
pub enum Page {
    /// The page held at least one entry, in the order the feed returned them.
    Entries(Vec<RawEntry>),
    /// A well-formed page with zero entries: no more matches past this offset.
    Exhausted,
}

/// HTTP client for the arXiv query API.
pub struct ArxivClient {
    client: Client,
    endpoint: String,
}

impl ArxivClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("arxtrend/0.1")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            endpoint: ARXIV_API_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint (mirror sites).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fetch one page of results for an already-encoded query.
    pub async fn fetch_page(&self, query: &str, start: usize, page_size: usize) -> Result<Page> {
        let url = format!(
            "{}?search_query={}&start={}&max_results={}",
            self.endpoint, query, start, page_size
        );

        let body = self.get_with_backoff(&url).await?;
        let entries = parse_feed(&body)?;

        debug!(start, count = entries.len(), "Fetched page");

        if entries.is_empty() {
            Ok(Page::Exhausted)
        } else {
            Ok(Page::Entries(entries))
        }
    }

    async fn get_with_backoff(&self, url: &str) -> Result<String> {
        let mut retries = 0;
        let max_retries = 3;

        loop {
            let response = self.client.get(url).send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response.text().await?);
            }

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                if retries < max_retries {
                    let backoff = Duration::from_secs(2u64.pow(retries));
                    warn!(
                        retries,
                        backoff_secs = backoff.as_secs(),
                        "Rate limited, backing off"
                    );
                    tokio::time::sleep(backoff).await;
                    retries += 1;
                    continue;
                }
                return Err(ArxtrendError::RateLimited(60));
            }

            return Err(ArxtrendError::Api {
                code: status.as_u16() as i32,
                message: format!("arXiv API error: {}", status),
            });
        }
    }
}
