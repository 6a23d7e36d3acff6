mod model;
pub use self::model::MetricTotal;
pub use self::model::Sample;
pub use self::model::Scrape;
pub use self::model::Summary;
pub(crate) mod parser;
pub use self::parser::parse;

mod aggregate;
pub use self::aggregate::sum_by_metric;
pub use self::aggregate::summarize;
pub use self::aggregate::TRACKED_METRICS;

mod metric_scraper;
pub use self::metric_scraper::metrics_endpoint;
pub use self::metric_scraper::MetricScraper;
pub use self::metric_scraper::ScrapeError;

#[cfg(test)]
mod test_data;
