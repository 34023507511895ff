use std::time::Duration;

/// Per-run crawl parameters. `max_depth` is the link-hop budget below the
/// seed; `max_pages` caps stored pages and fetch attempts.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub max_depth: usize,
    pub max_pages: usize,
    pub politeness_delay: Duration,
    pub fetch_timeout: Duration,
    pub concurrency: usize,
    pub crawl_deadline: Option<Duration>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            max_pages: 10,
            politeness_delay: Duration::from_secs(1),
            fetch_timeout: Duration::from_secs(10),
            concurrency: 1,
            crawl_deadline: None,
        }
    }
}

impl CrawlConfig {
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_pages(mut self, pages: usize) -> Self {
        self.max_pages = pages.max(1);
        self
    }

    pub fn with_politeness_delay(mut self, delay: Duration) -> Self {
        self.politeness_delay = delay;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.crawl_deadline = Some(deadline);
        self
    }
}
