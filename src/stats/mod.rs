use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct CrawlStats {
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub pages_fetched: usize,
    pub failed_requests: usize,
    pub skipped_duplicates: usize,
    pub bytes_downloaded: usize,
    pub status_codes: HashMap<u16, usize>,
    pub failure_kinds: HashMap<String, usize>,
    pub average_response_time: f64, // in milliseconds
}

impl CrawlStats {
    pub fn print_summary(&self) {
        let duration = self
            .end_time
            .unwrap_or_else(Utc::now)
            .signed_duration_since(self.start_time);

        println!("\nCrawl Statistics:");
        println!("=================");
        println!("Duration: {} seconds", duration.num_seconds());
        println!("Pages Fetched: {}", self.pages_fetched);
        println!("Failed Requests: {}", self.failed_requests);
        println!("Skipped Duplicates: {}", self.skipped_duplicates);
        println!(
            "Data Downloaded: {:.2} MB",
            self.bytes_downloaded as f64 / 1_000_000.0
        );
        println!(
            "Average Response Time: {:.2}ms",
            self.average_response_time
        );

        println!("\nStatus Codes:");
        for (code, count) in &self.status_codes {
            println!("  {}: {}", code, count);
        }

        if !self.failure_kinds.is_empty() {
            println!("\nFailure Kinds:");
            for (kind, count) in &self.failure_kinds {
                println!("  {}: {}", kind, count);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<CrawlStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(CrawlStats {
                start_time: Utc::now(),
                end_time: None,
                pages_fetched: 0,
                failed_requests: 0,
                skipped_duplicates: 0,
                bytes_downloaded: 0,
                status_codes: HashMap::new(),
                failure_kinds: HashMap::new(),
                average_response_time: 0.0,
            })),
        }
    }

    pub fn record_page(&self, status: u16, size: usize, duration: Duration) {
        let mut stats = self.stats.write();
        stats.pages_fetched += 1;
        *stats.status_codes.entry(status).or_insert(0) += 1;
        stats.bytes_downloaded += size;

        // Update average response time
        let current_total = stats.average_response_time * (stats.pages_fetched - 1) as f64;
        let new_duration = duration.num_milliseconds() as f64;
        stats.average_response_time = (current_total + new_duration) / stats.pages_fetched as f64;
    }

    pub fn record_failure(&self, kind: &str, status: Option<u16>) {
        let mut stats = self.stats.write();
        stats.failed_requests += 1;
        *stats.failure_kinds.entry(kind.to_string()).or_insert(0) += 1;
        if let Some(status) = status {
            *stats.status_codes.entry(status).or_insert(0) += 1;
        }
    }

    pub fn record_duplicate(&self) {
        self.stats.write().skipped_duplicates += 1;
    }

    pub fn finish(&self) {
        self.stats.write().end_time = Some(Utc::now());
    }

    pub fn get_stats(&self) -> CrawlStats {
        self.stats.read().clone()
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
