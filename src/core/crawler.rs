use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, info, trace, warn};
use std::sync::Arc;
use tokio::spawn;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use url::Url;

use crate::core::config::CrawlConfig;
use crate::core::errors::CrawlResult;
use crate::core::frontier::{Frontier, FrontierNode};
use crate::core::pages::PageContent;
use crate::core::politeness::PolitenessGate;
use crate::core::visited::VisitedRegistry;
use crate::extract::{ExtractedContent, Extractor};
use crate::fetch::Fetcher;
use crate::identity::{IdentityProvider, RotatingUserAgent};
use crate::stats::{CrawlStats, StatsTracker};
use crate::urls::{normalize, NormalizedUrl};

struct NodeOutcome {
    url: NormalizedUrl,
    depth: usize,
    result: CrawlResult<ExtractedContent>,
}

pub struct Crawler {
    fetcher: Box<dyn Fetcher>,
    extractor: Arc<dyn Extractor>,
    identity: Arc<dyn IdentityProvider>,
    config: CrawlConfig,
}

impl Crawler {
    pub fn new(fetcher: Box<dyn Fetcher>, extractor: Box<dyn Extractor>) -> Self {
        info!("Initializing crawler");
        Self {
            fetcher,
            extractor: Arc::from(extractor),
            identity: Arc::new(RotatingUserAgent::default()),
            config: CrawlConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CrawlConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_identity<I: IdentityProvider + 'static>(mut self, identity: I) -> Self {
        self.identity = Arc::new(identity);
        self
    }

    /// Crawls from `start_url`, staying on its domain, and returns extracted
    /// text per page in fetch order. Only a seed that fails to normalize is
    /// fatal; per-page failures are logged, counted, and skipped.
    pub async fn crawl(&self, start_url: &str) -> CrawlResult<PageContent> {
        let (pages, _) = self.crawl_with_stats(start_url).await?;
        Ok(pages)
    }

    pub async fn crawl_with_stats(
        &self,
        start_url: &str,
    ) -> CrawlResult<(PageContent, CrawlStats)> {
        let seed = normalize(start_url)?;
        // A zero page budget or concurrency would never attempt the seed.
        let max_pages = self.config.max_pages.max(1);
        let concurrency = self.config.concurrency.max(1);
        info!(
            "Starting crawl at {} (max_depth={}, max_pages={}, concurrency={})",
            seed, self.config.max_depth, max_pages, concurrency
        );

        let stats = StatsTracker::new();
        let gate = Arc::new(PolitenessGate::new(self.config.politeness_delay));
        let visited = VisitedRegistry::new();
        let mut frontier = Frontier::new();
        let mut pages = PageContent::new();
        let deadline = self.config.crawl_deadline.map(|limit| Instant::now() + limit);

        frontier.push(seed, self.config.max_depth);

        let mut in_flight: FuturesUnordered<JoinHandle<NodeOutcome>> = FuturesUnordered::new();

        loop {
            // Start fetches while there is a free slot; in-flight work
            // counts against the page budget.
            while in_flight.len() < concurrency
                && pages.len() + in_flight.len() < max_pages
            {
                if deadline.is_some_and(|at| Instant::now() >= at) {
                    info!("Crawl deadline reached, stopping expansion");
                    break;
                }
                let Some(node) = frontier.pop() else { break };
                if !visited.try_claim(&node.url) {
                    debug!("Skipping {} - already claimed", node.url);
                    stats.record_duplicate();
                    continue;
                }
                info!("Processing {} ({} hops remaining)", node.url, node.depth);
                in_flight.push(self.spawn_fetch(node, &gate, &stats));
            }

            match in_flight.next().await {
                None => break,
                Some(Err(join_error)) => warn!("Fetch task failed: {}", join_error),
                Some(Ok(outcome)) => match outcome.result {
                    Ok(content) => {
                        debug!(
                            "Extracted {} characters and {} links from {}",
                            content.text.len(),
                            content.links.len(),
                            outcome.url
                        );
                        if outcome.depth > 0 {
                            expand(&outcome.url, &content.links, outcome.depth, &visited, &mut frontier);
                        }
                        pages.insert(outcome.url, content.text);
                    }
                    Err(error) => {
                        warn!(
                            "Skipping {} ({} error): {}",
                            outcome.url,
                            error.kind(),
                            error
                        );
                    }
                },
            }
        }

        stats.finish();
        let snapshot = stats.get_stats();
        info!(
            "Crawl complete: {} pages stored, {} requests failed, {} duplicates skipped",
            pages.len(),
            snapshot.failed_requests,
            snapshot.skipped_duplicates
        );
        Ok((pages, snapshot))
    }

    fn spawn_fetch(
        &self,
        node: FrontierNode,
        gate: &Arc<PolitenessGate>,
        stats: &StatsTracker,
    ) -> JoinHandle<NodeOutcome> {
        let fetcher = self.fetcher.box_clone();
        let extractor = Arc::clone(&self.extractor);
        let gate = Arc::clone(gate);
        let stats = stats.clone();
        let user_agent = self.identity.next_user_agent();
        let timeout = self.config.fetch_timeout;
        let FrontierNode { url, depth } = node;

        spawn(async move {
            gate.acquire(url.host()).await;
            let started = Utc::now();
            let result = match fetcher.fetch(url.as_url(), &user_agent, timeout).await {
                Ok(page) => {
                    let elapsed = Utc::now().signed_duration_since(started);
                    stats.record_page(page.status, page.body.len(), elapsed);
                    match extractor.extract(&page.body, &page.url) {
                        Ok(content) => Ok(content),
                        Err(error) => {
                            stats.record_failure(error.kind(), None);
                            Err(error)
                        }
                    }
                }
                Err(error) => {
                    stats.record_failure(error.kind(), error.status());
                    Err(error)
                }
            };
            NodeOutcome { url, depth, result }
        })
    }
}

fn expand(
    page: &NormalizedUrl,
    links: &[Url],
    depth: usize,
    visited: &VisitedRegistry,
    frontier: &mut Frontier,
) {
    let mut children = Vec::new();
    for link in links {
        let child = match normalize(link.as_str()) {
            Ok(child) => child,
            Err(error) => {
                debug!("Ignoring link {}: {}", link, error);
                continue;
            }
        };
        if !child.same_host(page) {
            trace!("Ignoring off-domain link {}", child);
            continue;
        }
        if visited.is_claimed(&child) {
            continue;
        }
        children.push(child);
    }
    frontier.push_children(children, depth - 1);
}
