use super::model::{MetricTotal, Sample, Summary};

/// Counters exported by the proxy toolkit backend, in display order.
pub const TRACKED_METRICS: [&str; 7] = [
    "proxy_toolkit_cache_hits_total",
    "proxy_toolkit_cache_misses_total",
    "proxy_toolkit_idempotency_executed_total",
    "proxy_toolkit_idempotency_served_total",
    "proxy_toolkit_ratelimit_rejected_total",
    "proxy_toolkit_retry_calls_total",
    "proxy_toolkit_retry_attempts_total",
];

/// Sums the values of every sample named exactly `metric_name`, whatever its labels.
pub fn sum_by_metric(samples: &[Sample], metric_name: &str) -> f64 {
    samples
        .iter()
        .filter(|s| s.name == metric_name)
        .map(|s| s.value)
        .sum()
}

pub fn summarize<S: AsRef<str>>(samples: &[Sample], tracked: &[S]) -> Summary {
    let totals: Vec<MetricTotal> = tracked
        .iter()
        .map(|name| MetricTotal {
            name: name.as_ref().to_string(),
            value: sum_by_metric(samples, name.as_ref()),
        })
        .collect();
    // never scale against less than 1, an all-zero summary shows empty bars
    let max = totals.iter().map(|t| t.value).fold(1.0, f64::max);
    Summary { totals, max }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::prom::parse;
    use crate::prom::test_data::ACTUATOR_EXPOSITION;

    #[test]
    fn sum_ignores_labels() {
        let samples = parse("a{method=\"x\"} 2\na{method=\"y\"} 3\nb 10\n");
        assert_eq!(samples.len(), 3);
        assert_eq!(sum_by_metric(&samples, "a"), 5.0);
        assert_eq!(sum_by_metric(&samples, "b"), 10.0);
        assert_eq!(sum_by_metric(&samples, "c"), 0.0);
    }

    #[test]
    fn sum_over_nothing_is_zero() {
        assert_eq!(sum_by_metric(&[], "a"), 0.0);
        assert_eq!(sum_by_metric(&[], ""), 0.0);
    }

    #[test]
    fn sum_matches_exact_name_only() {
        let samples = vec![
            Sample::new("requests", HashMap::new(), 1.0),
            Sample::new("requests_total", HashMap::new(), 2.0),
            Sample::new("Requests", HashMap::new(), 4.0),
        ];
        assert_eq!(sum_by_metric(&samples, "requests"), 1.0);
        assert_eq!(sum_by_metric(&samples, "requests_total"), 2.0);
        assert_eq!(sum_by_metric(&samples, "Requests"), 4.0);
    }

    #[test]
    fn summarize_actuator_output() {
        let samples = parse(ACTUATOR_EXPOSITION);
        let summary = summarize(&samples, &TRACKED_METRICS);
        let totals: Vec<(&str, f64)> = summary
            .totals
            .iter()
            .map(|t| (t.name.as_str(), t.value))
            .collect();
        assert_eq!(
            totals,
            vec![
                ("proxy_toolkit_cache_hits_total", 42.0),
                ("proxy_toolkit_cache_misses_total", 10.0),
                ("proxy_toolkit_idempotency_executed_total", 7.0),
                ("proxy_toolkit_idempotency_served_total", 3.0),
                ("proxy_toolkit_ratelimit_rejected_total", 60.0),
                ("proxy_toolkit_retry_calls_total", 3.0),
                ("proxy_toolkit_retry_attempts_total", 5.0),
            ]
        );
        assert_eq!(summary.max, 60.0);
        assert_eq!(summary.percent(60.0), 100);
        assert_eq!(summary.percent(42.0), 70);
        assert_eq!(summary.percent(3.0), 5);
    }

    #[test]
    fn summarize_without_data_scales_against_one() {
        let summary = summarize(&[], &["missing"]);
        assert_eq!(summary.totals.len(), 1);
        assert_eq!(summary.totals[0].value, 0.0);
        assert_eq!(summary.max, 1.0);
        assert_eq!(summary.percent(0.0), 0);
    }

    #[test]
    fn percent_is_clamped() {
        let summary = summarize(&parse("a 0.5\nb -3\n"), &["a", "b"]);
        assert_eq!(summary.max, 1.0);
        assert_eq!(summary.percent(0.5), 50);
        assert_eq!(summary.percent(-3.0), 0);
    }
}
