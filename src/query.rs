//! Search expression construction for the arXiv query API.

/// Build the boolean search expression for one topic, percent-encoded for
/// use as the `search_query` parameter value.
///
/// The expression requires both the base phrase and the topic keyword to
/// appear in any indexed field: `all:"<base>" AND all:"<topic>"`.
pub fn build_search_query(base_term: &str, topic: &str) -> String {
    let expr = format!("all:\"{}\" AND all:\"{}\"", base_term, topic);
    urlencoding::encode(&expr).into_owned()
}
