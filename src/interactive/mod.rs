use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use proxy_console::prom::MetricScraper;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod app;
mod ui;

pub use self::app::App;

const TICK: Duration = Duration::from_millis(200);

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the dashboard until the user quits.
pub async fn show(
    metric_scraper: MetricScraper,
    tracked: Vec<String>,
    scrape_interval: u64,
) -> anyhow::Result<()> {
    let mut terminal = setup_terminal().context("cannot set up the terminal")?;
    let mut app = App::new(scrape_interval, metric_scraper, tracked);

    let result = run(&mut terminal, &mut app).await;

    restore_terminal(&mut terminal).context("cannot restore the terminal")?;
    result
}

async fn run(terminal: &mut Term, app: &mut App) -> anyhow::Result<()> {
    let interval = Duration::from_secs(app.scrape_interval.max(1));
    let mut next_scrape = Instant::now();

    while !app.should_quit {
        if Instant::now() >= next_scrape && !app.is_loading() {
            app.start_refresh();
            next_scrape = Instant::now() + interval;
        }
        app.poll_refresh().await;

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.on_quit(),
                    KeyCode::Char('r') => next_scrape = Instant::now(),
                    KeyCode::Tab => app.on_tab(),
                    KeyCode::Up => app.on_up(),
                    KeyCode::Down => app.on_down(),
                    KeyCode::PageUp => app.on_page_up(),
                    KeyCode::PageDown => app.on_page_down(),
                    _ => {}
                }
            }
        }
    }
    log::info!("Leaving the dashboard");
    Ok(())
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
