// src/crawl/mod.rs
// =============================================================================
// Breadth-first crawling of a single documentation site.
//
// - frontier: the pending-URL queue and the visited set
// - site: the loop that drives the frontier and the page fetcher
// =============================================================================

mod frontier;
mod site;

pub use site::crawl_site;
