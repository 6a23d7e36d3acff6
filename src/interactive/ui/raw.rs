use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use super::panel;
use crate::interactive::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App, focused: bool) {
    let (title, text) = match &app.last_scrape {
        Some(scrape) => (
            format!("Raw text ({} lines)", scrape.text.lines().count()),
            scrape.text.as_str(),
        ),
        None => ("Raw text".to_string(), "No data yet."),
    };
    let paragraph = Paragraph::new(text)
        .block(panel(&title, focused))
        .scroll((app.raw_scroll, 0));
    f.render_widget(paragraph, area);
}
