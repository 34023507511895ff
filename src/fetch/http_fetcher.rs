use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::{header, Client, ClientBuilder};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

use super::{FetchedPage, Fetcher};
use crate::core::{CrawlError, CrawlResult};

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new().expect("Failed to create default HttpFetcher")
    }
}

impl HttpFetcher {
    pub fn new() -> CrawlResult<Self> {
        let client = ClientBuilder::new().build()?;
        Ok(Self { client })
    }

    fn extract_headers(response: &reqwest::Response) -> HashMap<String, String> {
        response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &Url,
        user_agent: &str,
        timeout: Duration,
    ) -> CrawlResult<FetchedPage> {
        let started = Utc::now();
        let response = self
            .client
            .get(url.clone())
            .header(header::USER_AGENT, user_agent)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(CrawlError::HttpStatus {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let headers = Self::extract_headers(&response);
        let body = response.text().await?;
        debug!(
            "Fetched {} (status={}, body_length={})",
            url,
            status.as_u16(),
            body.len()
        );

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            headers,
            body,
            timestamp: started,
        })
    }

    fn box_clone(&self) -> Box<dyn Fetcher> {
        Box::new(self.clone())
    }
}
