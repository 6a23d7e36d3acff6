use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, ElementInFocus};

mod raw;
mod summary;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(summary::height(app)),
                Constraint::Min(5),
            ]
            .as_ref(),
        )
        .split(f.size());

    draw_header(f, chunks[0], app);
    summary::draw(f, chunks[1], app, app.focus == ElementInFocus::Summary);
    raw::draw(f, chunks[2], app, app.focus == ElementInFocus::RawText);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let status = if app.is_loading() {
        Span::styled("Loading…", Style::default().fg(Color::Yellow))
    } else if let Some(error) = &app.last_error {
        Span::styled(error.clone(), Style::default().fg(Color::Red))
    } else if let Some(scrape) = &app.last_scrape {
        Span::raw(format!(
            "Last scrape {} ({} samples)",
            scrape.time.format("%H:%M:%S"),
            scrape.samples.len()
        ))
    } else {
        Span::raw("No data yet.")
    };

    let line = Line::from(vec![
        Span::styled(
            app.endpoint().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  every {}s  ", app.scrape_interval)),
        status,
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Proxy toolkit metrics (q quit, r refresh, tab focus)"),
    );
    f.render_widget(header, area);
}

pub fn panel(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::LightGreen)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

pub fn format_value(value: f64) -> String {
    format!("{value:.0}")
}
