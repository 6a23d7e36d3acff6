use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::Parser;
use clap::ValueHint;
use reqwest::Url;

use proxy_console::prom::{metrics_endpoint, TRACKED_METRICS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Proxy toolkit backend base URL
    ///
    /// Metrics are scraped from <ENDPOINT>/actuator/prometheus.
    #[arg(short, long, env="PROXY_API_BASE_URL", value_hint=ValueHint::Url, default_value="http://localhost:8080")]
    pub endpoint: String,

    /// Backend port number
    ///
    /// Replaces the port of the backend base URL. Example: http://localhost:<PORT>
    #[arg(short, long, env="PROXY_API_PORT", value_hint=ValueHint::Other)]
    pub port: Option<u16>,

    /// Refresh interval in seconds
    ///
    /// The time between two consecutive scrapes of the metrics endpoint.
    #[arg(short='i', long, env="PROXY_REFRESH_INTERVAL", value_hint=ValueHint::Other, default_value="5")]
    pub refresh_interval: u16,

    /// Metric to show a total for (repeatable)
    ///
    /// Overrides the default list of proxy toolkit counters.
    #[arg(short, long = "metric", value_name = "NAME")]
    pub metrics: Vec<String>,

    /// Scrape once, print the summary and exit
    #[arg(long)]
    pub once: bool,

    /// Set the logging level
    ///
    /// Set the logging level to use when logging to the log file
    #[arg(short, long, env="LOG_LEVEL", value_hint=ValueHint::Other, default_value="INFO")]
    pub loglevel: log::LevelFilter,

    /// Log file
    #[arg(long, env="PROXY_LOG_FILE", value_hint=ValueHint::FilePath, default_value="proxy-console.log")]
    pub log_file: String,
}

impl Cli {
    /// Full scrape URL, with the port override applied.
    pub fn metrics_url(&self) -> anyhow::Result<String> {
        let base = match self.port {
            Some(port) => {
                let mut url = Url::parse(&self.endpoint)
                    .with_context(|| format!("invalid endpoint {}", self.endpoint))?;
                url.set_port(Some(port))
                    .map_err(|()| anyhow!("endpoint {} cannot carry a port", self.endpoint))?;
                url.to_string()
            }
            None => self.endpoint.clone(),
        };
        Ok(metrics_endpoint(&base))
    }

    /// A scrape that takes longer than one refresh interval is abandoned.
    pub fn scrape_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.refresh_interval.max(1)))
    }

    pub fn tracked_metrics(&self) -> Vec<String> {
        if self.metrics.is_empty() {
            TRACKED_METRICS.iter().map(|m| m.to_string()).collect()
        } else {
            self.metrics.clone()
        }
    }
}
