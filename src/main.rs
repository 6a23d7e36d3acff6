use crate::logging::app_config;
use anyhow::Context;
use clap::Parser;
use cli::Cli;
use proxy_console::prom::{summarize, MetricScraper};
use proxy_console::report;

mod cli;
mod interactive;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // initialize the logger
    log4rs::init_config(app_config(&cli.log_file, cli.loglevel)?)
        .context("cannot initialize logging")?;
    log::info!("Starting the application!");

    let endpoint = cli.metrics_url()?;
    let tracked = cli.tracked_metrics();
    log::info!("Reading metrics from endpoint: {}", endpoint);
    log::info!("Refresh interval is: {}s", cli.refresh_interval);

    let scraper = MetricScraper::new(endpoint, cli.scrape_timeout())?;
    if cli.once {
        let scrape = scraper.scrape().await?;
        print!("{}", report::render(&summarize(&scrape.samples, tracked.as_slice())));
        return Ok(());
    }

    // start dashboard
    log::info!("Showing the dashboard");
    interactive::show(scraper, tracked, u64::from(cli.refresh_interval)).await?;
    Ok(())
}
