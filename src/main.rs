use std::env;
use std::time::Duration;

use anyhow::bail;

use sitenest::{CrawlConfig, Crawler, HtmlExtractor, HttpFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .init();

    let mut seed: Option<String> = None;
    let mut as_json = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            _ => seed = Some(arg),
        }
    }
    let Some(seed) = seed else {
        bail!("usage: sitenest <start-url> [--json]");
    };

    let config = CrawlConfig::default()
        .with_max_depth(5)
        .with_max_pages(10)
        .with_politeness_delay(Duration::from_secs(1));

    let crawler = Crawler::new(Box::new(HttpFetcher::new()?), Box::new(HtmlExtractor::new()))
        .with_config(config);

    let (pages, stats) = crawler.crawl_with_stats(&seed).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&pages)?);
    } else {
        for (url, text) in pages.iter() {
            println!("{} ({} chars)", url, text.len());
        }
        stats.print_summary();
    }

    Ok(())
}
