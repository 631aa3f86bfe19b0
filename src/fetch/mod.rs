// src/fetch/mod.rs
// =============================================================================
// Everything needed to turn one URL into one page record.
//
// Submodules:
// - http: the transport trait and its reqwest implementation
// - document: a fixed-capability view over the HTML parser
// - extract: the content-selector fallback chain and link filtering
// =============================================================================

pub mod document;
pub mod extract;
pub mod http;

// The pieces the crawl loop and main need
pub use extract::{fetch_page, SiteScope};
pub use http::{FetchError, HttpTransport, RequestHeaders, Transport};
