//! # arxtrend
//!
//! arXiv cross-domain publication trend crawler.
//!
//! For each configured topic keyword the crawler queries the arXiv Atom API
//! for works matching a fixed base phrase AND the topic, pages through the
//! results with a fixed pacing interval, keeps records whose publication
//! year falls inside a configured window, and rolls everything up into
//! per-topic CSV extracts plus a year-by-topic count grid and line chart.
//!
//! ## Modules
//!
//! - [`query`] - Search expression construction
//! - [`feed`] - Atom feed parsing
//! - [`fetch`] - arXiv query API client
//! - [`collect`] - Paginated per-topic collection
//! - [`record`] - Record normalization and year filtering
//! - [`aggregate`] - Record table and year-by-topic pivot
//! - [`output`] - CSV and chart artifacts
//! - [`pipeline`] - Sequential per-topic crawl driver
//! - [`config`] - Immutable run configuration
//! - [`error`] - Custom error types

pub mod aggregate;
pub mod collect;
pub mod config;
pub mod error;
pub mod feed;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod record;

pub use error::{ArxtrendError, Result};
