// src/config.rs
// =============================================================================
// Crawl settings and where they come from.
//
// Precedence, lowest first:
// 1. Built-in defaults (the HubSpot developer guides)
// 2. An optional JSON config file (--config)
// 3. Command-line flags
//
// Every field of the config file is optional, so a file containing only
// {"max_pages": 10} is valid.
// =============================================================================

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::cli::Cli;
use crate::fetch::{RequestHeaders, SiteScope};

/// Everything the crawl loop and the output step need to know.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrawlConfig {
    /// URL the crawl starts from. Always fetched, whatever the include filter says
    #[serde(default = "default_seed_url")]
    pub seed_url: String,

    /// Substring a link must contain to be queued
    #[serde(default = "default_include")]
    pub include: String,

    /// Prefix that makes an absolute link same-site. Derived from the seed
    /// URL when unset
    #[serde(default)]
    pub site_origin: Option<String>,

    /// Page budget: the crawl stops once this many records exist
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// JSON file the records are written to
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub headers: RequestHeaders,
}

fn default_seed_url() -> String {
    "https://developers.hubspot.com/beta-docs/guides".to_string()
}

fn default_include() -> String {
    "/beta-docs/guides".to_string()
}

fn default_max_pages() -> usize {
    50
}

fn default_output() -> PathBuf {
    PathBuf::from("hubspot_guides_content.json")
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_url: default_seed_url(),
            include: default_include(),
            site_origin: None,
            max_pages: default_max_pages(),
            output: default_output(),
            headers: RequestHeaders::default(),
        }
    }
}

impl CrawlConfig {
    /// Builds the final config from the command line: defaults, then the
    /// config file if one was given, then the flags. The result is validated.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file. Missing fields fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Overrides any setting the user passed on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(max_pages) = cli.max_pages {
            self.max_pages = max_pages;
        }
        if let Some(seed) = &cli.seed {
            self.seed_url = seed.clone();
        }
        if let Some(include) = &cli.include {
            self.include = include.clone();
        }
        if let Some(origin) = &cli.site_origin {
            self.site_origin = Some(origin.clone());
        }
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if let Some(user_agent) = &cli.user_agent {
            self.headers.user_agent = user_agent.clone();
        }
    }

    /// Rejects settings that would make the crawl meaningless before any
    /// request is made.
    pub fn validate(&self) -> Result<()> {
        let seed = Url::parse(&self.seed_url)
            .with_context(|| format!("invalid seed URL '{}'", self.seed_url))?;

        if seed.scheme() != "http" && seed.scheme() != "https" {
            bail!("seed URL must be http or https, got '{}'", self.seed_url);
        }

        if let Some(origin) = &self.site_origin {
            Url::parse(origin).with_context(|| format!("invalid site origin '{}'", origin))?;
        }

        Ok(())
    }

    /// The link scope for this crawl: the configured origin, or the seed's.
    pub fn site_scope(&self) -> Result<SiteScope> {
        if let Some(origin) = &self.site_origin {
            return Ok(SiteScope::new(origin.trim_end_matches('/')));
        }

        let seed = Url::parse(&self.seed_url)
            .with_context(|| format!("invalid seed URL '{}'", self.seed_url))?;
        Ok(SiteScope::from_url(&seed))
    }
}
