use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Supplies the User-Agent header value for each outgoing request.
pub trait IdentityProvider: Send + Sync {
    fn next_user_agent(&self) -> String;
}

pub const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
];

#[derive(Debug, Clone)]
pub struct RotatingUserAgent {
    pool: Arc<Vec<String>>,
    cursor: Arc<AtomicUsize>,
}

impl RotatingUserAgent {
    /// An empty pool falls back to the built-in browser pool.
    pub fn new(pool: Vec<String>) -> Self {
        let pool = if pool.is_empty() {
            DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect()
        } else {
            pool
        };
        Self {
            pool: Arc::new(pool),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Default for RotatingUserAgent {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl IdentityProvider for RotatingUserAgent {
    fn next_user_agent(&self) -> String {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.pool[index % self.pool.len()].clone()
    }
}

#[derive(Debug, Clone)]
pub struct StaticUserAgent(pub String);

impl IdentityProvider for StaticUserAgent {
    fn next_user_agent(&self) -> String {
        self.0.clone()
    }
}
