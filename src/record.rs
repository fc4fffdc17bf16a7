//! Normalized paper records.

use crate::config::YearWindow;
use crate::feed::RawEntry;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Timestamp format used by the arXiv feed (`2021-05-04T17:58:02Z`).
const PUBLISHED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One normalized bibliographic record. Created once, never mutated.
///
/// `year` and `month` are derived from `published`; `year` always lies
/// inside the window the record was normalized against.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaperRecord {
    pub title: String,
    pub summary: String,
    pub published: NaiveDate,
    pub year: i32,
    pub month: String,
    pub category: String,
}

/// Map one raw entry into a record, tagging it with its topic.
///
/// Returns `None` when the published timestamp does not parse (the entry is
/// skipped, the surrounding page continues) or when the publication year
/// falls outside the window (filtered, not an error).
pub fn normalize(raw: &RawEntry, topic: &str, window: YearWindow) -> Option<PaperRecord> {
    let published = NaiveDateTime::parse_from_str(&raw.published, PUBLISHED_FORMAT).ok()?;
    let date = published.date();
    let year = date.year();

    if !window.contains(year) {
        return None;
    }

    Some(PaperRecord {
        title: raw.title.clone(),
        summary: raw.summary.clone(),
        published: date,
        year,
        month: date.format("%Y-%m").to_string(),
        category: topic.to_string(),
    })
}
