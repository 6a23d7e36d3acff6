use anyhow::Context;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {M} - {m}{n}";

/// Logger configuration writing everything at `level` and above to `path`.
///
/// The terminal belongs to the dashboard, so nothing is logged to stdout.
pub fn app_config(path: &str, level: LevelFilter) -> anyhow::Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .with_context(|| format!("cannot open log file {path}"))?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| anyhow::anyhow!("invalid logger configuration: {e}"))?;
    Ok(config)
}
