use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: Url, status: u16 },

    #[error("extraction error: {0}")]
    Extract(String),
}

impl CrawlError {
    /// Coarse classification used in log lines and failure stats.
    pub fn kind(&self) -> &'static str {
        match self {
            CrawlError::InvalidUrl { .. } => "invalid_url",
            CrawlError::Http(_) | CrawlError::HttpStatus { .. } => "fetch",
            CrawlError::Extract(_) => "extract",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CrawlError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type CrawlResult<T> = Result<T, CrawlError>;
