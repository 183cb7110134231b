use std::collections::HashSet;

use crate::{normalize_fragment, scan_fragments, ScanConfig};

/// Ordered set of URLs: first insertion wins, later duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueUrls {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl UniqueUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when `url` was already present.
    pub fn insert(&mut self, url: String) -> bool {
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.order.push(url);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// Consume the set, keeping at most `limit` entries in discovery order.
    pub fn into_truncated(self, limit: usize) -> Vec<String> {
        let mut urls = self.order;
        urls.truncate(limit);
        urls
    }
}

impl<S: Into<String>> FromIterator<S> for UniqueUrls {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut urls = Self::new();
        for url in iter {
            urls.insert(url.into());
        }
        urls
    }
}

/// Scan, normalize, deduplicate and truncate in one pass over `text`.
pub fn collect_image_urls(text: &str, config: &ScanConfig) -> Vec<String> {
    scan_fragments(text)
        .into_iter()
        .map(|fragment| normalize_fragment(fragment.text, &config.origin))
        .collect::<UniqueUrls>()
        .into_truncated(config.max_results)
}
