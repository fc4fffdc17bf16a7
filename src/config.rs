//! Run configuration.
//!
//! All knobs are fixed at startup and threaded through calls as one
//! immutable value; nothing here mutates at runtime.

use crate::error::{ArxtrendError, Result};
use std::time::Duration;

/// Inclusive range of publication years retained after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    min: i32,
    max: i32,
}

impl YearWindow {
    /// Create a window; `min` and `max` are both inclusive.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(ArxtrendError::Config(format!(
                "year window {}..={} is empty",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }

    /// Every year in the window, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }
}

/// Configuration for one crawl run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Topic keywords, one query per topic, processed in order.
    pub topics: Vec<String>,
    /// Base phrase required alongside every topic keyword.
    pub base_term: String,
    /// Publication-year filter window.
    pub window: YearWindow,
    /// Maximum results fetched per topic regardless of availability.
    pub per_topic_cap: usize,
    /// Results requested per page.
    pub page_size: usize,
    /// Fixed pause after every fetched page.
    pub page_interval: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            topics: ["medical", "education", "chemistry", "environment"]
                .map(String::from)
                .to_vec(),
            base_term: "artificial intelligence".to_string(),
            window: YearWindow {
                min: 2010,
                max: 2024,
            },
            per_topic_cap: 1000,
            page_size: 100,
            page_interval: Duration::from_secs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let w = YearWindow::new(2010, 2024).expect("valid window");
        assert!(w.contains(2010));
        assert!(w.contains(2024));
        assert!(!w.contains(2009));
        assert!(!w.contains(2025));
    }

    #[test]
    fn window_rejects_inverted_bounds() {
        assert!(YearWindow::new(2024, 2010).is_err());
    }

    #[test]
    fn single_year_window_is_valid() {
        let w = YearWindow::new(2020, 2020).expect("valid window");
        assert!(w.contains(2020));
        assert_eq!(w.years().collect::<Vec<_>>(), vec![2020]);
    }
}
