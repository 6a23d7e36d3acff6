use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Gauge, Paragraph},
    Frame,
};

use super::{format_value, panel};
use crate::interactive::App;

const NAME_WIDTH: u16 = 44;
const VALUE_WIDTH: u16 = 12;

/// Rows needed for the summary panel, borders included.
pub fn height(app: &App) -> u16 {
    u16::try_from(app.tracked.len()).unwrap_or(u16::MAX).saturating_add(2)
}

pub fn draw(f: &mut Frame, area: Rect, app: &App, focused: bool) {
    let block = panel("Summary", focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(summary) = &app.summary else {
        f.render_widget(Paragraph::new("No data yet."), inner);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); summary.totals.len()])
        .split(inner);

    for (total, row) in summary.totals.iter().zip(rows.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                [
                    Constraint::Length(NAME_WIDTH),
                    Constraint::Min(10),
                    Constraint::Length(VALUE_WIDTH),
                ]
                .as_ref(),
            )
            .split(*row);

        f.render_widget(Paragraph::new(total.name.as_str()), cols[0]);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::LightGreen).bg(Color::DarkGray))
            .percent(summary.percent(total.value))
            .label("");
        f.render_widget(gauge, cols[1]);
        f.render_widget(
            Paragraph::new(format_value(total.value)).alignment(Alignment::Right),
            cols[2],
        );
    }
}
