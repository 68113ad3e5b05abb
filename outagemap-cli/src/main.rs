//! outagemap CLI - scrape the outage map into one JSON array
//!
//! Resolves the active data directory, walks the tile quadtree from the
//! seed tiles, and prints the deepest outage records as a JSON array on
//! stdout. Logs go to stderr.

mod error;
mod runner;

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use outagemap::config::ConfigFile;
use outagemap::output::write_records;
use outagemap::scraper::{OutageScraper, ScraperConfig};
use outagemap::tile::TileId;

use crate::error::CliError;
use crate::runner::CliRunner;

#[derive(Debug, Parser)]
#[command(name = "outagemap", version)]
#[command(about = "Scrape the tiled outage map into a flat JSON array", long_about = None)]
struct Args {
    /// Config file (default: ~/.outagemap/config.ini)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// URL holding metadata.json and the published data directories
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Top-level tile to start from (repeatable; replaces the configured seeds)
    #[arg(long = "seed", value_name = "TILE")]
    seeds: Vec<TileId>,

    /// Deepest level below a seed to expand
    #[arg(long)]
    max_depth: Option<usize>,

    /// HTTP request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Merge flags over the config file.
    fn scraper_config(&self, config: &ConfigFile) -> ScraperConfig {
        let seeds = if self.seeds.is_empty() {
            config.source.seeds.clone()
        } else {
            self.seeds.clone()
        };
        let base_url = self
            .base_url
            .clone()
            .unwrap_or_else(|| config.source.base_url.clone());

        ScraperConfig::builder()
            .base_url(base_url)
            .seeds(seeds)
            .max_depth(self.max_depth.or(config.traversal.max_depth))
            .build()
    }

    fn timeout_secs(&self, config: &ConfigFile) -> u64 {
        self.timeout.unwrap_or(config.http.timeout)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        e.exit();
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config.as_deref(), args.log_file.clone(), args.verbose)?;
    runner.log_startup();

    let config = args.scraper_config(runner.config());
    let client = runner.create_client(args.timeout_secs(runner.config()))?;
    let scraper = OutageScraper::new(client, config);

    let start = Instant::now();
    let records = scraper.scrape().await?;
    info!(
        records = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Scrape complete"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, &records, args.pretty).map_err(CliError::Output)?;
    out.flush().map_err(CliError::Output)
}
