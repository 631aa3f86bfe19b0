// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Nothing is required: running `guide-crawler` with no arguments crawls the
// default guide section with the default page budget. Every flag overrides
// the matching setting from the config file (or the built-in default).
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "guide-crawler",
    version,
    about = "Crawl a documentation site breadth-first and save the page text as JSON",
    long_about = "guide-crawler starts at a seed URL, follows same-site links whose URL contains \
                  the include filter, and writes the title, text and links of every page it \
                  fetched to a JSON file. Failed pages are logged and skipped."
)]
pub struct Cli {
    /// Maximum number of pages to save (default: 50)
    #[arg(long, short = 'n')]
    pub max_pages: Option<usize>,

    /// URL the crawl starts from
    #[arg(long)]
    pub seed: Option<String>,

    /// Only follow links whose URL contains this fragment (e.g. /beta-docs/guides)
    #[arg(long)]
    pub include: Option<String>,

    /// Absolute links are kept only if they start with this origin
    /// (default: the seed URL's origin)
    #[arg(long)]
    pub site_origin: Option<String>,

    /// Where to write the JSON output
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// JSON config file; flags given on the command line win over it
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log every matched selector and queued link
    #[arg(long, short)]
    pub verbose: bool,
}
