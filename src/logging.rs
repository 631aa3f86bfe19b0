// src/logging.rs
// =============================================================================
// Sets up the tracing subscriber.
//
// Logs go to stderr so stdout only ever carries the one-line summary.
// When RUST_LOG is set it decides what is logged; otherwise this crate logs
// at info and everything else at warn. --verbose always raises this crate to
// debug.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,guide_crawler=info";
const VERBOSE_DIRECTIVE: &str = "guide_crawler=debug";

pub fn init_logging(verbose: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(rust_log.as_deref(), verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}

// RUST_LOG (when set and non-empty) replaces the default filter entirely.
fn build_filter(rust_log: Option<&str>, verbose: bool) -> Result<EnvFilter> {
    let filter = match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {} value '{}'", EnvFilter::DEFAULT_ENV, directives))?,
        None => EnvFilter::new(DEFAULT_FILTER),
    };

    if verbose {
        Ok(filter.add_directive(VERBOSE_DIRECTIVE.parse()?))
    } else {
        Ok(filter)
    }
}
