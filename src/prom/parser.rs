use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use super::model::Sample;

lazy_static! {
    static ref SAMPLE_LINE: Regex = Regex::new(
        r"^([a-zA-Z_:][a-zA-Z0-9_:]*)(\{([^}]*)\})?\s+([-+eE0-9.]+)\s*([0-9]+)?$"
    )
    .expect("sample line regex");
}

/// Parses Prometheus text exposition into samples, in line order.
///
/// Best effort: comments, blank lines and anything that does not look like
/// `name{labels} value [timestamp]` are skipped, as are values that are not
/// finite numbers. The timestamp is discarded.
pub fn parse(text: &str) -> Vec<Sample> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Sample> {
    let line = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let caps = SAMPLE_LINE.captures(line)?;
    let name = caps.get(1)?.as_str();
    let value: f64 = caps.get(4)?.as_str().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let labels = caps
        .get(3)
        .map(|raw| parse_labels(raw.as_str()))
        .unwrap_or_default();

    Some(Sample::new(name, labels, value))
}

pub(crate) fn parse_labels(raw: &str) -> HashMap<String, String> {
    let mut labels = HashMap::new();
    for part in split_unquoted_commas(raw) {
        let part = part.trim();
        let Some(idx) = part.find('=') else {
            continue;
        };
        if idx == 0 {
            continue;
        }
        let key = part[..idx].trim();
        let value = part[idx + 1..].trim();
        labels.insert(key.to_string(), unquote(value));
    }
    labels
}

/// Splits on commas that are outside double quotes. Empty segments are dropped.
fn split_unquoted_commas(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (i, c) in raw.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);
    parts.retain(|p| !p.trim().is_empty());
    parts
}

fn unquote(value: &str) -> String {
    let inner = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    unescape(inner)
}

// Only `\"` and `\n` are recognized, everything else is kept verbatim.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n') => {
                    out.push('\n');
                    chars.next();
                    continue;
                }
                Some('"') => {
                    out.push('"');
                    chars.next();
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }
    out
}
