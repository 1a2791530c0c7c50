//! Linkrot main entry point
//!
//! This is the command-line interface for the Linkrot dead link finder.

use clap::Parser;
use linkrot::config::{load_config, Config, ErrorPolicy};
use linkrot::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Linkrot: a same-host dead link finder
///
/// Linkrot follows every link of one website, starting from a single page,
/// and lists each page that answered 404 together with the page that links
/// to it.
#[derive(Parser, Debug)]
#[command(name = "linkrot")]
#[command(version)]
#[command(about = "Find pages on a website that answer 404", long_about = None)]
struct Cli {
    /// Page to start the scan
    #[arg(short, long, value_name = "URL")]
    start: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Pause between requests, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// What to do when a request or a link fails
    #[arg(long, value_enum)]
    on_error: Option<ErrorPolicy>,

    /// Also write a markdown report to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    match crawl(config).await {
        Ok(report) => {
            print!("{}", report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkrot=info,warn"),
            1 => EnvFilter::new("linkrot=debug,info"),
            2 => EnvFilter::new("linkrot=trace,debug"),
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

/// Loads the config file, if any, and layers the command line on top
fn build_config(cli: &Cli) -> Result<Config, linkrot::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(start) = &cli.start {
        config.crawler.start_url = Some(start.clone());
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.crawler.delay_ms = delay_ms;
    }
    if let Some(policy) = cli.on_error {
        config.crawler.on_error = policy;
    }
    if let Some(report) = &cli.report {
        config.output.report_path = Some(report.display().to_string());
    }

    config.finalize()
}
