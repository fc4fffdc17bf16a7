//! arxtrend - arXiv cross-domain publication trend crawler.
//!
//! Queries the arXiv API for a fixed base phrase crossed with a set of topic
//! keywords, filters records to a publication-year window, and writes CSV
//! extracts plus a year-by-topic trend chart.
//!
//! ## Usage
//!
//! ```bash
//! arxtrend
//! arxtrend --topics medical,education --year-from 2015 --year-to 2024
//! ```

use anyhow::{Context, Result};
use arxtrend::config::{RunConfig, YearWindow};
use arxtrend::fetch::ArxivClient;
use arxtrend::{output, pipeline};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// arXiv cross-domain publication trend crawler
#[derive(Parser)]
#[command(name = "arxtrend")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Topic keywords, one query per topic
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "medical,education,chemistry,environment"
    )]
    topics: Vec<String>,

    /// Base phrase required alongside every topic keyword
    #[arg(long, default_value = "artificial intelligence")]
    base_term: String,

    /// First publication year kept (inclusive)
    #[arg(long, default_value_t = 2010)]
    year_from: i32,

    /// Last publication year kept (inclusive)
    #[arg(long, default_value_t = 2024)]
    year_to: i32,

    /// Maximum results fetched per topic
    #[arg(long, default_value_t = 1000)]
    cap: usize,

    /// Mirror endpoint for the query API
    #[arg(long)]
    endpoint: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt().with_env_filter(filter).with_target(true).init();

    let window = YearWindow::new(cli.year_from, cli.year_to).context("Invalid year window")?;
    let config = RunConfig {
        topics: cli.topics,
        base_term: cli.base_term,
        window,
        per_topic_cap: cli.cap,
        ..RunConfig::default()
    };

    if config.topics.is_empty() {
        anyhow::bail!("At least one topic is required");
    }

    let mut client = ArxivClient::new().context("Failed to build HTTP client")?;
    if let Some(endpoint) = cli.endpoint {
        client = client.with_endpoint(endpoint);
    }

    info!(
        topics = config.topics.len(),
        base_term = %config.base_term,
        "Starting crawl"
    );

    let table = pipeline::run_crawl(&client, &config).await;
    let pivot = table.pivot(config.window, &config.topics);

    output::write_artifacts(&cli.output, &table, &pivot)
        .context("Failed to write output artifacts")?;

    info!(records = table.len(), "Run complete");
    println!(
        "✓ Collected {} records. Artifacts in: {}",
        table.len(),
        cli.output.display()
    );

    Ok(())
}
