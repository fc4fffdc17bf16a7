//! Sequential per-topic crawl pipeline.

use crate::aggregate::RecordTable;
use crate::collect::{collect_topic, Pacer, PageSource};
use crate::config::RunConfig;
use crate::query::build_search_query;
use crate::record::{normalize, PaperRecord};
use tracing::{info, warn};

/// Crawl every configured topic in order and assemble the sorted record
/// table.
///
/// A topic whose pagination fails outright contributes zero records; the
/// remaining topics still run, so completion always yields whatever was
/// successfully collected.
pub async fn run_crawl<S: PageSource>(source: &S, config: &RunConfig) -> RecordTable {
    let pacer = Pacer::new(config.page_interval);
    let mut batches = Vec::with_capacity(config.topics.len());

    for topic in &config.topics {
        let query = build_search_query(&config.base_term, topic);
        info!(topic = %topic, "Collecting topic");

        let raw = match collect_topic(
            source,
            pacer,
            &query,
            config.per_topic_cap,
            config.page_size,
        )
        .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!(topic = %topic, error = %e, "Topic collection failed, skipping");
                Vec::new()
            }
        };

        let records: Vec<PaperRecord> = raw
            .iter()
            .filter_map(|entry| normalize(entry, topic, config.window))
            .collect();

        info!(
            topic = %topic,
            fetched = raw.len(),
            kept = records.len(),
            "Topic normalized"
        );
        batches.push(records);
    }

    RecordTable::build(batches)
}
