use indexmap::IndexMap;
use serde::Serialize;

use crate::urls::NormalizedUrl;

/// Extracted page text keyed by canonical URL, in fetch order.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct PageContent {
    pages: IndexMap<NormalizedUrl, String>,
}

impl PageContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: NormalizedUrl, text: String) {
        self.pages.insert(url, text);
    }

    pub fn contains(&self, url: &NormalizedUrl) -> bool {
        self.pages.contains_key(url)
    }

    pub fn get(&self, url: &NormalizedUrl) -> Option<&str> {
        self.pages.get(url).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn urls(&self) -> impl Iterator<Item = &NormalizedUrl> {
        self.pages.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NormalizedUrl, &str)> {
        self.pages.iter().map(|(url, text)| (url, text.as_str()))
    }

    pub fn into_map(self) -> IndexMap<NormalizedUrl, String> {
        self.pages
    }
}
