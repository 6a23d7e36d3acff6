use proxy_console::prom::{summarize, MetricScraper, Scrape, ScrapeError, Summary};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementInFocus {
    Summary,
    RawText,
}

#[derive(Debug, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
}

const PAGE: u16 = 10;

#[derive(Debug)]
pub struct App {
    pub scrape_interval: u64,
    pub metric_scraper: MetricScraper,
    pub tracked: Vec<String>,

    pub last_scrape: Option<Scrape>,
    pub summary: Option<Summary>,
    pub last_error: Option<String>,

    pub focus: ElementInFocus,
    pub raw_scroll: u16,
    pub should_quit: bool,

    pending: Option<JoinHandle<Result<Scrape, ScrapeError>>>,
}

impl App {
    pub fn new(scrape_interval: u64, metric_scraper: MetricScraper, tracked: Vec<String>) -> App {
        App {
            scrape_interval,
            metric_scraper,
            tracked,
            last_scrape: None,
            summary: None,
            last_error: None,
            focus: ElementInFocus::Summary,
            raw_scroll: 0,
            should_quit: false,
            pending: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.metric_scraper.endpoint()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a scrape in the background unless one is already running.
    pub fn start_refresh(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let scraper = self.metric_scraper.clone();
        self.pending = Some(tokio::spawn(async move { scraper.scrape().await }));
    }

    /// Picks up the outcome of a finished background scrape.
    pub async fn poll_refresh(&mut self) {
        if !self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            return;
        }
        let Some(handle) = self.pending.take() else {
            return;
        };
        match handle.await {
            Ok(result) => self.apply(result),
            Err(e) => {
                log::error!("Scrape task failed: {e}");
                self.last_error = Some(format!("scrape task failed: {e}"));
            }
        }
    }

    /// Records a scrape outcome. A failure keeps the previous data on screen.
    pub fn apply(&mut self, result: Result<Scrape, ScrapeError>) {
        match result {
            Ok(scrape) => {
                self.summary = Some(summarize(&scrape.samples, self.tracked.as_slice()));
                self.last_scrape = Some(scrape);
                self.last_error = None;
                self.clamp_scroll();
            }
            Err(e) => {
                log::error!("Scrape failed: {e}");
                self.last_error = Some(e.to_string());
            }
        }
    }

    pub fn on_tab(&mut self) {
        self.focus = match self.focus {
            ElementInFocus::Summary => ElementInFocus::RawText,
            ElementInFocus::RawText => ElementInFocus::Summary,
        };
    }

    pub fn on_scroll(&mut self, direction: Direction, amount: u16) {
        if self.focus != ElementInFocus::RawText {
            return;
        }
        self.raw_scroll = match direction {
            Direction::Up => self.raw_scroll.saturating_sub(amount),
            Direction::Down => self.raw_scroll.saturating_add(amount),
        };
        self.clamp_scroll();
    }

    pub fn on_up(&mut self) {
        self.on_scroll(Direction::Up, 1);
    }

    pub fn on_down(&mut self) {
        self.on_scroll(Direction::Down, 1);
    }

    pub fn on_page_up(&mut self) {
        self.on_scroll(Direction::Up, PAGE);
    }

    pub fn on_page_down(&mut self) {
        self.on_scroll(Direction::Down, PAGE);
    }

    pub fn on_quit(&mut self) {
        self.should_quit = true;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn raw_line_count(&self) -> usize {
        self.last_scrape
            .as_ref()
            .map_or(0, |scrape| scrape.text.lines().count())
    }

    fn clamp_scroll(&mut self) {
        let max = u16::try_from(self.raw_line_count().saturating_sub(1)).unwrap_or(u16::MAX);
        self.raw_scroll = self.raw_scroll.min(max);
    }
}
