// src/page.rs
// =============================================================================
// The record produced for every page the crawler fetched successfully.
//
// Field order matters: serde writes struct fields in declaration order, so
// the JSON output always reads url, title, content, links.
// =============================================================================

use serde::{Deserialize, Serialize};

/// One successfully fetched and extracted page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// The URL exactly as it was taken off the frontier
    pub url: String,
    /// Text of the <title> element, empty when the page has none
    pub title: String,
    /// Visible text of the first matching content region
    pub content: String,
    /// Outbound same-site links in document order (duplicates allowed)
    pub links: Vec<String>,
}
