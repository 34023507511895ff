use parking_lot::RwLock;
use std::collections::HashSet;

use crate::urls::NormalizedUrl;

/// URLs claimed for fetching. A URL is claimed when a fetch is attempted,
/// not after it succeeds, so a failing page is never re-attempted.
#[derive(Debug, Default)]
pub struct VisitedRegistry {
    claimed: RwLock<HashSet<NormalizedUrl>>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once per URL; the caller that gets `true` owns the fetch.
    pub fn try_claim(&self, url: &NormalizedUrl) -> bool {
        self.claimed.write().insert(url.clone())
    }

    pub fn is_claimed(&self, url: &NormalizedUrl) -> bool {
        self.claimed.read().contains(url)
    }

    pub fn len(&self) -> usize {
        self.claimed.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.read().is_empty()
    }
}
