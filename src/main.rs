// src/main.rs
// =============================================================================
// Entry point of guide-crawler.
//
// What happens here:
// 1. Parse command-line arguments and set up logging
// 2. Build the crawl config (defaults, config file, flags)
// 3. Crawl the site, one page at a time
// 4. Write the records to JSON and print a one-line summary
//
// Exit codes: 0 = success, 2 = configuration or output error. Pages that
// fail to fetch are logged and never change the exit code.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod fetch;
mod logging;
mod output;
mod page;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::Cli;
use config::CrawlConfig;
use fetch::HttpTransport;

// The crawl is strictly sequential, so a single-threaded runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let config = CrawlConfig::load(&cli)?;
    let transport = HttpTransport::new().context("failed to build HTTP client")?;

    let report = crawl::crawl_site(&transport, &config).await?;

    if !report.failures.is_empty() {
        info!(
            failures = report.failures.len(),
            "some pages could not be fetched and were skipped"
        );
    }

    output::write_pages(&config.output, &report.pages)?;

    println!(
        "Crawled {} pages. Content saved to {}",
        report.pages.len(),
        config.output.display()
    );

    Ok(())
}
