mod config;
mod crawler;
mod errors;
mod frontier;
mod pages;
mod politeness;
mod visited;


pub use config::CrawlConfig;
pub use crawler::Crawler;
pub use errors::{CrawlError, CrawlResult};
pub use frontier::{Frontier, FrontierNode};
pub use pages::PageContent;
pub use politeness::PolitenessGate;
pub use visited::VisitedRegistry;
