//! Plain text rendering of a metrics summary, for non-interactive use.

use crate::prom::Summary;

const BAR_WIDTH: usize = 40;

/// One line per tracked metric: name, a `#` bar scaled to the largest total, and the value.
pub fn render(summary: &Summary) -> String {
    let name_width = summary
        .totals
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for total in &summary.totals {
        let filled = usize::from(summary.percent(total.value)) * BAR_WIDTH / 100;
        out.push_str(&format!(
            "{:<name_width$}  [{:<bar_width$}]  {:.0}\n",
            total.name,
            "#".repeat(filled),
            total.value,
            name_width = name_width,
            bar_width = BAR_WIDTH,
        ));
    }
    out
}
