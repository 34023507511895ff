use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

use super::{FetchedPage, Fetcher};
use crate::core::{CrawlError, CrawlResult};

#[derive(Debug, Clone)]
pub struct MockPage {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockPage {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub struct FetchRecord {
    pub url: String,
    pub user_agent: String,
}

/// Serves scripted pages and records every fetch in call order. Clones share
/// the fetch log; unregistered URLs answer 404.
#[derive(Clone, Default)]
pub struct MockFetcher {
    pages: HashMap<String, MockPage>,
    log: Arc<Mutex<Vec<FetchRecord>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, page: MockPage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    pub fn fetch_log(&self) -> Vec<FetchRecord> {
        self.log.lock().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.log.lock().len()
    }

    pub fn fetched_urls(&self) -> Vec<String> {
        self.log.lock().iter().map(|r| r.url.clone()).collect()
    }

    fn lookup(&self, url: &Url) -> Option<MockPage> {
        let key = url.as_str();
        self.pages
            .get(key)
            .or_else(|| self.pages.get(key.trim_end_matches('/')))
            .cloned()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(
        &self,
        url: &Url,
        user_agent: &str,
        _timeout: Duration,
    ) -> CrawlResult<FetchedPage> {
        self.log.lock().push(FetchRecord {
            url: url.as_str().to_string(),
            user_agent: user_agent.to_string(),
        });

        let Some(page) = self.lookup(url) else {
            return Err(CrawlError::HttpStatus {
                url: url.clone(),
                status: 404,
            });
        };

        if let Some(delay) = page.delay {
            sleep(delay).await;
        }

        if (200..400).contains(&page.status) {
            Ok(FetchedPage {
                url: url.clone(),
                status: page.status,
                headers: HashMap::new(),
                body: page.body,
                timestamp: Utc::now(),
            })
        } else {
            Err(CrawlError::HttpStatus {
                url: url.clone(),
                status: page.status,
            })
        }
    }

    fn box_clone(&self) -> Box<dyn Fetcher> {
        Box::new(self.clone())
    }
}
