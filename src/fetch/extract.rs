// src/fetch/extract.rs
// =============================================================================
// This module turns one URL into one `PageRecord`.
//
// How it works:
// 1. GET the page through the transport
// 2. Anything other than a 2xx answer is a `FetchError`
// 3. Parse the body and walk the content-selector fallback chain
// 4. Pull out the title, the visible text and the same-site links
//
// Documentation sites vary a lot in markup, so the content region is found by
// trying a fixed list of selectors in order. "body" sits in the middle of the
// list, which means a real HTML document always yields some text.
// =============================================================================

use tracing::debug;
use url::Url;

use super::document::{DocumentNode, DocumentTree, ScraperDocument};
use super::http::{FetchError, RequestHeaders, Transport};
use crate::page::PageRecord;

/// Content regions to try, in order. The first selector that matches any
/// element wins.
pub const CONTENT_SELECTORS: &[(&str, &str)] = &[
    ("main content region", "main"),
    ("article region", "article"),
    ("generic content container", "div.content"),
    ("page body", "body"),
    ("main-content id", "#main-content"),
    ("main-role container", r#"div[role="main"]"#),
];

/// Which outbound links count as part of the site.
///
/// A link is kept when its raw href is site-relative (starts with "/") or
/// when its resolved form starts with `origin` followed by a URL boundary
/// ("/", "?", "#" or the end), so `https://example.com.evil.net` is not
/// mistaken for `https://example.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteScope {
    pub origin: String,
}

impl SiteScope {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    /// Scope covering the origin (scheme, host, port) of `url`.
    pub fn from_url(url: &Url) -> Self {
        Self::new(url.origin().ascii_serialization())
    }

    fn allows(&self, href: &str, resolved: &str) -> bool {
        href.starts_with('/') || self.contains(resolved)
    }

    fn contains(&self, resolved: &str) -> bool {
        match resolved.strip_prefix(self.origin.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
            None => false,
        }
    }
}

/// Fetches `url` and extracts a record from it.
///
/// Every failure mode (bad URL, transport error, non-2xx status) comes back
/// as a `FetchError`; nothing here is retried.
pub async fn fetch_page(
    transport: &dyn Transport,
    url: &str,
    headers: &RequestHeaders,
    scope: &SiteScope,
) -> Result<PageRecord, FetchError> {
    let base = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

    let response = transport.fetch(url, headers).await?;

    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }

    debug!(
        url,
        content_type = response.content_type.as_deref().unwrap_or("unknown"),
        bytes = response.body.len(),
        "fetched page"
    );

    let document = ScraperDocument::parse(&response.body);
    Ok(extract_page(&document, url, &base, scope))
}

/// Builds a record from an already parsed document. Never fails: missing
/// pieces come back empty.
pub fn extract_page<D: DocumentTree>(
    document: &D,
    url: &str,
    base: &Url,
    scope: &SiteScope,
) -> PageRecord {
    PageRecord {
        url: url.to_string(),
        title: extract_title(document),
        content: extract_content(document),
        links: extract_links(document, base, scope),
    }
}

/// Text of the <title> element, or "" when there is none.
pub fn extract_title<D: DocumentTree>(document: &D) -> String {
    document
        .select_first("title")
        .map(|title| title.text().concat().trim().to_string())
        .unwrap_or_default()
}

/// Visible text of the first content region in the fallback chain.
pub fn extract_content<D: DocumentTree>(document: &D) -> String {
    match select_content_region(document) {
        Some(region) => join_text(&region.text()),
        None => String::new(),
    }
}

/// Walks `CONTENT_SELECTORS` and stops at the first match. `None` is a
/// normal outcome, not an error.
pub fn select_content_region<D: DocumentTree>(document: &D) -> Option<D::Node<'_>> {
    CONTENT_SELECTORS.iter().find_map(|(label, selector)| {
        let region = document.select_first(selector)?;
        debug!(region = *label, selector = *selector, "matched content region");
        Some(region)
    })
}

/// Every in-scope `<a href>` resolved against `base`, in document order.
/// Duplicates are kept; the frontier deduplicates.
pub fn extract_links<D: DocumentTree>(document: &D, base: &Url, scope: &SiteScope) -> Vec<String> {
    document
        .select_all("a[href]")
        .iter()
        .filter_map(|anchor| {
            let href = anchor.attr("href")?;
            let resolved = resolve_url(base, href)?;
            scope.allows(href, &resolved).then_some(resolved)
        })
        .collect()
}

// Resolves a possibly-relative href against the page URL.
// "/docs/x" resolves against the site root, "x" against the page's directory.
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(String::from)
}

// Trims every text fragment, drops the empty ones, joins with single spaces.
fn join_text(fragments: &[String]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> SiteScope {
        SiteScope::new("https://example.com")
    }

    fn base() -> Url {
        Url::parse("https://example.com/docs/intro").unwrap()
    }

    #[test]
    fn test_prefers_main_over_body() {
        let doc = ScraperDocument::parse(
            "<html><body><nav>Menu</nav><main><h1>Guide</h1><p>Read me</p></main></body></html>",
        );
        assert_eq!(extract_content(&doc), "Guide Read me");
    }

    #[test]
    fn test_article_before_content_div() {
        let doc = ScraperDocument::parse(
            r#"<body><div class="content">Div text</div><article>Article text</article></body>"#,
        );
        assert_eq!(extract_content(&doc), "Article text");
    }

    #[test]
    fn test_content_div_before_body() {
        let doc = ScraperDocument::parse(
            r#"<body><header>Header</header><div class="content">Only this</div></body>"#,
        );
        assert_eq!(extract_content(&doc), "Only this");
    }

    #[test]
    fn test_falls_back_to_body() {
        let doc = ScraperDocument::parse(
            "<html><head><title>T</title></head><body><div>First</div>\n  <span> Second </span></body></html>",
        );
        assert_eq!(extract_content(&doc), "First Second");
    }

    #[test]
    fn test_no_region_yields_empty_content() {
        struct Nothing;
        struct NoNode;

        impl DocumentNode for NoNode {
            fn text(&self) -> Vec<String> {
                Vec::new()
            }
            fn attr(&self, _name: &str) -> Option<&str> {
                None
            }
        }

        impl DocumentTree for Nothing {
            type Node<'a> = NoNode;

            fn select_first(&self, _selector: &str) -> Option<NoNode> {
                None
            }
            fn select_all(&self, _selector: &str) -> Vec<NoNode> {
                Vec::new()
            }
        }

        let record = extract_page(&Nothing, "https://example.com/x", &base(), &scope());
        assert_eq!(record.title, "");
        assert_eq!(record.content, "");
        assert!(record.links.is_empty());
    }

    #[test]
    fn test_missing_title_is_empty() {
        let doc = ScraperDocument::parse("<body><p>No title here</p></body>");
        assert_eq!(extract_title(&doc), "");
    }

    #[test]
    fn test_title_is_trimmed() {
        let doc = ScraperDocument::parse("<head><title>\n  Getting started  \n</title></head>");
        assert_eq!(extract_title(&doc), "Getting started");
    }

    #[test]
    fn test_links_resolved_and_filtered() {
        let doc = ScraperDocument::parse(
            r#"
            <a href="/docs/a">A</a>
            <a href="https://example.com/docs/b">B</a>
            <a href="https://other.com/docs/c">External</a>
            <a href="relative">Relative</a>
            <a href="mailto:team@example.com">Mail</a>
            <a name="anchor-without-href">Nothing</a>
            <a href="/docs/a">A again</a>
            "#,
        );
        let links = extract_links(&doc, &base(), &scope());
        assert_eq!(
            links,
            vec![
                "https://example.com/docs/a",
                "https://example.com/docs/b",
                "https://example.com/docs/relative",
                "https://example.com/docs/a",
            ]
        );
    }

    #[test]
    fn test_scope_origin_is_configurable() {
        let doc = ScraperDocument::parse(
            r#"<a href="https://developers.example.org/guides/x">X</a><a href="/guides/y">Y</a>"#,
        );
        let scope = SiteScope::new("https://developers.example.org");
        let links = extract_links(&doc, &base(), &scope);
        assert_eq!(
            links,
            vec![
                "https://developers.example.org/guides/x",
                "https://example.com/guides/y",
            ]
        );
    }

    #[test]
    fn test_look_alike_host_is_out_of_scope() {
        let doc = ScraperDocument::parse(
            r#"
            <a href="https://example.com.evil.net/docs/x">Look-alike</a>
            <a href="https://example.community/docs/y">Other TLD</a>
            <a href="https://example.com:8443/docs/z">Other port</a>
            <a href="https://example.com?page=2">Query</a>
            <a href="https://example.com/docs/ok">Same site</a>
            "#,
        );
        let seed = Url::parse("https://example.com/docs").unwrap();
        let links = extract_links(&doc, &base(), &SiteScope::from_url(&seed));
        assert_eq!(
            links,
            vec!["https://example.com/?page=2", "https://example.com/docs/ok"]
        );
    }

    #[test]
    fn test_scope_with_path_prefix_respects_boundary() {
        let scope = SiteScope::new("https://example.org/guides");
        assert!(scope.contains("https://example.org/guides/intro"));
        assert!(scope.contains("https://example.org/guides"));
        assert!(!scope.contains("https://example.org/guidesmith"));
    }

    #[test]
    fn test_scope_from_url_keeps_port() {
        let url = Url::parse("http://localhost:8080/docs").unwrap();
        assert_eq!(SiteScope::from_url(&url).origin, "http://localhost:8080");
    }
}
