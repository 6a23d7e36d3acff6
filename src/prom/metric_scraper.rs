use std::time::Duration;

use chrono::Local;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use thiserror::Error;

use super::model::Scrape;
use super::parser;

const PROMETHEUS_PATH: &str = "/actuator/prometheus";

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("metrics endpoint answered {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("request to metrics endpoint failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// The Prometheus scrape endpoint exposed under a backend base URL.
pub fn metrics_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PROMETHEUS_PATH)
}

#[derive(Debug, Clone)]
pub struct MetricScraper {
    client: reqwest::Client,
    endpoint: String,
}

impl MetricScraper {
    /// A scraper whose requests give up after `timeout`, so a backend that
    /// accepts the connection but never answers still yields an error.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<MetricScraper, ScrapeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(MetricScraper {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn scrape(&self) -> Result<Scrape, ScrapeError> {
        log::debug!("Scraping {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "text/plain")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            log::warn!("Scrape of {} failed with {}", self.endpoint, status);
            return Err(ScrapeError::Status { status, body: text });
        }

        let samples = parser::parse(&text);
        log::info!("Scraped {} samples from {}", samples.len(), self.endpoint);
        Ok(Scrape {
            text,
            samples,
            time: Local::now(),
        })
    }
}
