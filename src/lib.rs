pub mod core;
pub mod extract;
pub mod fetch;
pub mod identity;
pub mod stats;
pub mod urls;

pub use core::Crawler;
pub use core::{CrawlConfig, CrawlError, CrawlResult, PageContent};
pub use extract::{ExtractedContent, Extractor, HtmlExtractor};
pub use fetch::{FetchedPage, Fetcher, HttpFetcher, MockFetcher};
pub use identity::{IdentityProvider, RotatingUserAgent, StaticUserAgent};
pub use stats::{CrawlStats, StatsTracker};
pub use urls::{normalize, same_domain, NormalizedUrl};
