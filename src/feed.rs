//! Atom feed parsing for the arXiv query API.
//!
//! The API answers with an Atom document; each `<entry>` exposes `title`,
//! `summary` and `published`. Parsing is event-driven with quick-xml because
//! Atom namespaces make regex parsing brittle. Unknown elements are ignored
//! and text content is whitespace-normalized (arXiv wraps titles and
//! abstracts with embedded newlines and indentation).

use crate::error::{ArxtrendError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// One unparsed feed entry.
///
/// Transient per page: consumed by the normalizer, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub summary: String,
    pub published: String,
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse an Atom document into its entries, in feed order.
///
/// A malformed document is a parse error, not an empty result, so callers
/// never mistake it for exhaustion.
pub fn parse_feed(body: &str) -> Result<Vec<RawEntry>> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut cur = RawEntry::default();
    let mut in_entry = false;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name.ends_with("entry") {
                    cur = RawEntry::default();
                    in_entry = true;
                }
                text.clear();
            }
            Ok(Event::Text(t)) => {
                if in_entry {
                    let chunk = t
                        .xml_content()
                        .map_err(|e| ArxtrendError::Feed(e.to_string()))?;
                    text.push_str(&chunk);
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if in_entry {
                    let txt = normalize_ws(&text);
                    if name.ends_with("title") {
                        cur.title = txt;
                    } else if name.ends_with("summary") {
                        cur.summary = txt;
                    } else if name.ends_with("published") {
                        cur.published = txt;
                    } else if name.ends_with("entry") {
                        in_entry = false;
                        entries.push(std::mem::take(&mut cur));
                    }
                    text.clear();
                }
            }
            Err(e) => return Err(ArxtrendError::Feed(e.to_string())),
            _ => {}
        }
    }

    Ok(entries)
}
