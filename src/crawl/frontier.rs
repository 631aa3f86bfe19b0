// src/crawl/frontier.rs
// =============================================================================
// The frontier: the queue of URLs still to fetch plus the set of URLs that
// have already been handed out.
//
// Rules:
// - A URL is marked visited the moment it is popped, before it is fetched.
//   A page that fails is therefore never retried, and a page linked from many
//   places is fetched at most once.
// - Nothing visited ever goes back into the queue, and nothing is queued
//   twice.
// - Only links containing the include filter are queued. The seed is exempt.
//
// All state is owned by the `Frontier` value and only changes through its
// methods.
// =============================================================================

use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone)]
pub struct Frontier {
    // FIFO order for breadth-first crawling
    pending: VecDeque<String>,
    // Mirror of `pending` for O(1) "already queued?" checks
    queued: HashSet<String>,
    visited: HashSet<String>,
    include: String,
}

impl Frontier {
    /// A frontier holding only the seed, with nothing visited yet.
    pub fn new(seed: impl Into<String>, include: impl Into<String>) -> Self {
        let seed = seed.into();

        let mut pending = VecDeque::new();
        pending.push_back(seed.clone());

        let mut queued = HashSet::new();
        queued.insert(seed);

        Self {
            pending,
            queued,
            visited: HashSet::new(),
            include: include.into(),
        }
    }

    /// Pops the next URL and marks it visited. `None` means the crawl is done.
    pub fn next_candidate(&mut self) -> Option<String> {
        let url = self.pending.pop_front()?;
        self.queued.remove(&url);

        let first_visit = self.visited.insert(url.clone());
        debug_assert!(first_visit, "frontier handed out {} twice", url);

        Some(url)
    }

    /// Queues every link that passes the include filter and has been neither
    /// visited nor queued yet. Order is preserved. Returns how many were added.
    pub fn offer_links(&mut self, links: &[String]) -> usize {
        let mut added = 0;

        for link in links {
            if self.visited.contains(link)
                || !link.contains(&self.include)
                || self.queued.contains(link)
            {
                continue;
            }

            self.queued.insert(link.clone());
            self.pending.push_back(link.clone());
            added += 1;
        }

        added
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why both a VecDeque and a HashSet for pending URLs?
//    - The VecDeque keeps the order (push_back / pop_front = FIFO = BFS)
//    - The HashSet answers "is this already queued?" in O(1)
//    - Both are only ever changed together, inside this file
//
// 2. What does the `?` in `self.pending.pop_front()?` do?
//    - pop_front() returns Option<String>
//    - `?` returns None from next_candidate() early if the queue is empty
//
// 3. What is debug_assert!?
//    - Like assert!, but only checked in debug builds and tests
//    - Release builds compile it out
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn links(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_starts_with_seed_only() {
        let frontier = Frontier::new("https://example.com/docs", "/docs");
        assert_eq!(frontier.pending_len(), 1);
        assert_eq!(frontier.visited_len(), 0);
        assert!(!frontier.is_visited("https://example.com/docs"));
    }

    #[test]
    fn test_seed_is_exempt_from_filter() {
        let mut frontier = Frontier::new("https://example.com/", "/guides");
        assert_eq!(frontier.next_candidate().as_deref(), Some("https://example.com/"));
    }

    #[test]
    fn test_pop_marks_visited() {
        let mut frontier = Frontier::new("https://example.com/docs", "/docs");
        let url = frontier.next_candidate().unwrap();
        assert!(frontier.is_visited(&url));
        assert_eq!(frontier.pending_len(), 0);
        assert!(frontier.next_candidate().is_none());
    }

    #[test]
    fn test_offer_filters_and_dedups() {
        let mut frontier = Frontier::new("https://example.com/docs", "/docs");
        frontier.next_candidate();

        let added = frontier.offer_links(&links(&[
            "https://example.com/docs/a",
            "https://example.com/other",
            "https://example.com/docs",
            "https://example.com/docs/b",
            "https://example.com/docs/a",
        ]));

        assert_eq!(added, 2);
        assert_eq!(frontier.next_candidate().as_deref(), Some("https://example.com/docs/a"));
        assert_eq!(frontier.next_candidate().as_deref(), Some("https://example.com/docs/b"));
        assert!(frontier.next_candidate().is_none());
    }

    #[test]
    fn test_visited_url_never_requeued() {
        let mut frontier = Frontier::new("https://example.com/docs", "/docs");
        frontier.next_candidate();
        frontier.offer_links(&links(&["https://example.com/docs/a"]));
        frontier.next_candidate();

        // /docs/a is in flight or done; offering it again must not queue it
        let added = frontier.offer_links(&links(&["https://example.com/docs/a"]));
        assert_eq!(added, 0);
        assert_eq!(frontier.pending_len(), 0);
    }

    #[test]
    fn test_pending_url_not_queued_twice() {
        let mut frontier = Frontier::new("https://example.com/docs", "/docs");
        frontier.next_candidate();
        frontier.offer_links(&links(&["https://example.com/docs/a"]));
        frontier.offer_links(&links(&["https://example.com/docs/a", "https://example.com/docs/b"]));

        assert_eq!(frontier.pending_len(), 2);
    }
}
