// src/fetch/document.rs
// =============================================================================
// A small, fixed-capability view of a parsed HTML document.
//
// The extractor only ever needs four things from a document:
// - select the first element matching a CSS selector
// - select every element matching a CSS selector
// - the visible text under an element
// - an attribute of an element
//
// `DocumentTree` and `DocumentNode` expose exactly that, and `ScraperDocument`
// implements them with the `scraper` crate. Any other parser can be dropped in
// behind the same traits.
// =============================================================================

use scraper::{ElementRef, Html, Node, Selector};

// Elements whose text never shows up on the rendered page
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// One element of a parsed document.
pub trait DocumentNode {
    /// Every visible text node under this element, in document order
    fn text(&self) -> Vec<String>;

    /// Value of the named attribute, if present
    fn attr(&self, name: &str) -> Option<&str>;
}

/// A parsed document that can be queried with CSS selectors.
///
/// An invalid selector is not an error: it simply matches nothing.
pub trait DocumentTree {
    type Node<'a>: DocumentNode
    where
        Self: 'a;

    fn select_first(&self, selector: &str) -> Option<Self::Node<'_>>;

    fn select_all(&self, selector: &str) -> Vec<Self::Node<'_>>;
}

/// `DocumentTree` backed by scraper/html5ever.
pub struct ScraperDocument {
    html: Html,
}

impl ScraperDocument {
    /// Parses a full HTML document. html5ever recovers from any markup, so
    /// this never fails.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }
}

impl DocumentTree for ScraperDocument {
    type Node<'a> = ElementRef<'a>;

    fn select_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let selector = parse_selector(selector)?;
        self.html.select(&selector).next()
    }

    fn select_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match parse_selector(selector) {
            Some(selector) => self.html.select(&selector).collect(),
            None => Vec::new(),
        }
    }
}

// ElementRef has inherent `text`/`attr` methods of its own; call these through
// the trait when the concrete type is known.
impl DocumentNode for ElementRef<'_> {
    fn text(&self) -> Vec<String> {
        self.descendants()
            .filter_map(|node| match node.value() {
                Node::Text(text) if !node.ancestors().any(|a| is_hidden(a.value())) => {
                    Some(String::from(&**text))
                }
                _ => None,
            })
            .collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::debug!(selector, "ignoring invalid CSS selector");
            None
        }
    }
}

fn is_hidden(node: &Node) -> bool {
    match node {
        Node::Element(element) => HIDDEN_ELEMENTS.contains(&element.name()),
        _ => false,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `type Node<'a> ... where Self: 'a`?
//    - A generic associated type (GAT): the node type borrows from the document
//    - For scraper it is ElementRef<'a>, which points into the parsed Html
//    - The `where Self: 'a` bound says a node can't outlive its document
//
// 2. Why `String::from(&**text)`?
//    - `text` is a &Text; one `*` gives Text, the second derefs Text to str
//    - `&` borrows that str so String::from can copy it
// -----------------------------------------------------------------------------
