//! Record table assembly and the year-by-topic roll-up.
//!
//! The table owns every collected record in one stable total order; the
//! per-topic view and the yearly pivot are read-only projections of it, not
//! separately owned copies.

use crate::config::YearWindow;
use crate::record::PaperRecord;
use chrono::Datelike;
use std::collections::HashMap;

/// All collected records sorted by (category, year, published) ascending.
#[derive(Debug, Default)]
pub struct RecordTable {
    records: Vec<PaperRecord>,
}

impl RecordTable {
    /// Concatenate per-topic batches and sort into the output order.
    ///
    /// The sort is stable, so records tied on (category, year, published)
    /// keep their arrival order.
    pub fn build(batches: Vec<Vec<PaperRecord>>) -> Self {
        let mut records: Vec<PaperRecord> = batches.into_iter().flatten().collect();
        records.sort_by(|a, b| {
            (a.category.as_str(), a.year, a.published)
                .cmp(&(b.category.as_str(), b.year, b.published))
        });
        Self { records }
    }

    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only projection of one topic's records, relative order preserved.
    pub fn by_category<'a>(&'a self, topic: &'a str) -> impl Iterator<Item = &'a PaperRecord> {
        self.records.iter().filter(move |r| r.category == topic)
    }

    /// Count records per (year, topic) into a rectangular grid covering
    /// every configured year and topic, absent combinations zero-filled.
    ///
    /// Year is re-derived from `published` rather than trusting the stored
    /// `year` field.
    pub fn pivot(&self, window: YearWindow, topics: &[String]) -> YearlyPivot {
        let mut counts: HashMap<(i32, &str), u64> = HashMap::new();
        for r in &self.records {
            *counts
                .entry((r.published.year(), r.category.as_str()))
                .or_insert(0) += 1;
        }

        let years: Vec<i32> = window.years().collect();
        let rows = years
            .iter()
            .map(|year| {
                topics
                    .iter()
                    .map(|topic| counts.get(&(*year, topic.as_str())).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        YearlyPivot {
            years,
            topics: topics.to_vec(),
            rows,
        }
    }
}

/// Rectangular year-by-topic count grid: one row per configured year
/// (ascending), one column per configured topic (configured order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyPivot {
    pub years: Vec<i32>,
    pub topics: Vec<String>,
    pub rows: Vec<Vec<u64>>,
}

impl YearlyPivot {
    pub fn cell(&self, year: i32, topic: &str) -> Option<u64> {
        let row = self.years.iter().position(|y| *y == year)?;
        let col = self.topics.iter().position(|t| t == topic)?;
        self.rows.get(row)?.get(col).copied()
    }

    /// One topic's counts in year order. Used as a chart series.
    pub fn series(&self, topic: &str) -> Option<Vec<u64>> {
        let col = self.topics.iter().position(|t| t == topic)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(col).copied().unwrap_or(0))
                .collect(),
        )
    }

    pub fn total(&self) -> u64 {
        self.rows.iter().flatten().sum()
    }

    pub fn max_count(&self) -> u64 {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }
}
