mod fetcher;
mod http_fetcher;
mod mock_fetcher;

pub use fetcher::{FetchedPage, Fetcher};
pub use http_fetcher::HttpFetcher;
pub use mock_fetcher::{FetchRecord, MockFetcher, MockPage};
