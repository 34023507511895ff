use url::Url;

use crate::core::CrawlResult;

#[derive(Debug, Clone, Default)]
pub struct ExtractedContent {
    pub text: String,
    pub links: Vec<Url>,
}

/// Turns a fetched body into text and absolute links, in page order. Runs
/// synchronously inside the fetch task, so it must not block on I/O.
pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str, base: &Url) -> CrawlResult<ExtractedContent>;
}
