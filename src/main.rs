//! Linkstage main entry point
//!
//! Command-line interface for the staged link discovery pipeline. All the
//! real logic lives in the library; this binary parses arguments, sets up
//! logging, runs the pipeline, and prints the final link set.

use anyhow::Result;
use clap::Parser;
use linkstage::config::RunConfig;
use linkstage::pipeline::discover;
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Linkstage: staged link discovery
///
/// For each pattern and each address, starting at the seed address, find
/// the addresses of all links matching the pattern; the links found by one
/// pattern become the pages searched by the next.
#[derive(Parser, Debug)]
#[command(name = "linkstage")]
#[command(version)]
#[command(about = "Staged link discovery from a seed page", long_about = None)]
struct Cli {
    /// The address of the page at which to start the search
    #[arg(short, long, value_name = "URL")]
    start_url: String,

    /// Regular expressions to search in each link, one stage per pattern
    #[arg(short, long, value_name = "REGEX", num_args = 1.., required = true)]
    patterns: Vec<String>,

    /// Maximum number of concurrent fetches within a stage
    #[arg(long, default_value_t = 8)]
    max_concurrent: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Emit a JSON report instead of one address per line
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// JSON report emitted by --json
#[derive(Debug, Serialize)]
struct DiscoveryReport<'a> {
    start_url: &'a str,
    patterns: &'a [String],
    links: &'a [String],
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = RunConfig::new(cli.start_url, cli.patterns);
    config.max_concurrent = cli.max_concurrent;
    config.timeout = Duration::from_secs(cli.timeout);

    tracing::info!(
        "Starting discovery from {} with {} pattern(s)",
        config.start_url,
        config.patterns.len()
    );

    let links = discover(&config).await?;

    if cli.json {
        let report = DiscoveryReport {
            start_url: &config.start_url,
            patterns: &config.patterns,
            links: &links,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for link in &links {
            println!("{}", link);
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkstage=warn"),
            1 => EnvFilter::new("linkstage=info,warn"),
            2 => EnvFilter::new("linkstage=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
