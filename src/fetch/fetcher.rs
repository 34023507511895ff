use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

use crate::core::CrawlResult;

/// A retrieved page; `url` is the final URL after redirects, which links
/// resolve against.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Network failures, timeouts, and non-success statuses are errors.
    async fn fetch(
        &self,
        url: &Url,
        user_agent: &str,
        timeout: Duration,
    ) -> CrawlResult<FetchedPage>;

    fn box_clone(&self) -> Box<dyn Fetcher>;
}
