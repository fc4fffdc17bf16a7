//! Paginated collection of raw entries for one topic.
//!
//! Drives the page fetcher across an offset sequence, stopping at the first
//! exhausted page or when the per-topic cap is reached, whichever comes
//! first, and pausing for a fixed interval after every fetched page.

use crate::error::Result;
use crate::feed::RawEntry;
use crate::fetch::{ArxivClient, Page};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// A source of result pages.
///
/// The seam that lets tests drive the collector with a scripted stub
/// instead of the network client.
pub trait PageSource {
    fn fetch_page(
        &self,
        query: &str,
        start: usize,
        page_size: usize,
    ) -> impl Future<Output = Result<Page>> + Send;
}

impl PageSource for ArxivClient {
    async fn fetch_page(&self, query: &str, start: usize, page_size: usize) -> Result<Page> {
        ArxivClient::fetch_page(self, query, start, page_size).await
    }
}

/// Fixed-interval pause between page requests.
///
/// Deliberate, non-adaptive backpressure against the remote service. Kept as
/// its own value so cancellation or timeouts can be layered on later without
/// touching the fetch logic.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// No pacing. Used by tests.
    pub fn none() -> Self {
        Self {
            interval: Duration::ZERO,
        }
    }

    pub async fn after_page(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// Collect raw entries for one topic.
///
/// Pages are requested strictly in offset order. The first exhausted page is
/// terminal, as is an accumulated count reaching `cap` even when the last
/// page was full. Transport failures propagate; the caller decides whether
/// other topics still run.
pub async fn collect_topic<S: PageSource>(
    source: &S,
    pacer: Pacer,
    query: &str,
    cap: usize,
    page_size: usize,
) -> Result<Vec<RawEntry>> {
    let mut collected = Vec::new();
    let mut start = 0;

    loop {
        match source.fetch_page(query, start, page_size).await? {
            Page::Exhausted => {
                debug!(start, "No more results");
                break;
            }
            Page::Entries(entries) => {
                debug!(start, count = entries.len(), "Accumulating page");
                collected.extend(entries);
            }
        }

        start += page_size;
        pacer.after_page().await;

        if start >= cap {
            debug!(start, cap, "Per-topic cap reached");
            break;
        }
    }

    info!(total = collected.len(), "Topic collection complete");
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArxtrendError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns full pages for the first `nonempty_pages` offsets, then
    /// signals exhaustion, counting every call.
    struct ScriptedSource {
        calls: AtomicUsize,
        nonempty_pages: usize,
        page_len: usize,
    }

    impl ScriptedSource {
        fn new(nonempty_pages: usize, page_len: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                nonempty_pages,
                page_len,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl PageSource for ScriptedSource {
        async fn fetch_page(
            &self,
            _query: &str,
            start: usize,
            page_size: usize,
        ) -> Result<Page> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if start / page_size < self.nonempty_pages {
                Ok(Page::Entries(vec![RawEntry::default(); self.page_len]))
            } else {
                Ok(Page::Exhausted)
            }
        }
    }

    struct FailingSource;

    impl PageSource for FailingSource {
        async fn fetch_page(
            &self,
            _query: &str,
            _start: usize,
            _page_size: usize,
        ) -> Result<Page> {
            Err(ArxtrendError::Api {
                code: 500,
                message: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn stops_at_first_empty_page() {
        let source = ScriptedSource::new(2, 100);
        let entries = collect_topic(&source, Pacer::none(), "q", 1000, 100)
            .await
            .expect("collection succeeds");
        assert_eq!(source.calls(), 3);
        assert_eq!(entries.len(), 200);
    }

    #[tokio::test]
    async fn stops_at_cap_even_when_pages_keep_coming() {
        let source = ScriptedSource::new(usize::MAX, 100);
        let entries = collect_topic(&source, Pacer::none(), "q", 1000, 100)
            .await
            .expect("collection succeeds");
        assert_eq!(source.calls(), 10);
        assert_eq!(entries.len(), 1000);
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let result = collect_topic(&FailingSource, Pacer::none(), "q", 1000, 100).await;
        assert!(result.is_err());
    }
}
