use std::collections::HashMap;

use chrono::{DateTime, Local};

/// One observation taken from a single line of exposition text.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: String,
    pub labels: HashMap<String, String>,
    pub value: f64,
}

impl Sample {
    pub fn new(name: impl Into<String>, labels: HashMap<String, String>, value: f64) -> Sample {
        Sample {
            name: name.into(),
            labels,
            value,
        }
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

/// The total recorded under one metric name, labels ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTotal {
    pub name: String,
    pub value: f64,
}

/// Totals for a list of tracked metrics, in the order they were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub totals: Vec<MetricTotal>,
    pub max: f64,
}

impl Summary {
    /// Bar share of `value` against the largest total, in percent.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self, value: f64) -> u16 {
        let ratio = (value / self.max * 100.0).round();
        ratio.clamp(0.0, 100.0) as u16
    }
}

/// Result of a successful scrape of the metrics endpoint.
#[derive(Debug, Clone)]
pub struct Scrape {
    pub text: String,
    pub samples: Vec<Sample>,
    pub time: DateTime<Local>,
}
