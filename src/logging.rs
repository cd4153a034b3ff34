//! Logging configuration using tracing.
//!
//! The terminal belongs to the TUI, so logs go to a daily rolling file under
//! `<data_local_dir>/trackdeck/logs/`. The level is controlled by the
//! `TRACKDECK_LOG` environment variable:
//!
//! ```bash
//! TRACKDECK_LOG=debug trackdeck
//! TRACKDECK_LOG=trackdeck::surface=trace trackdeck
//! ```

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "TRACKDECK_LOG";
const DEFAULT_FILTER: &str = "trackdeck=info,warn";

/// Initialize the logging subsystem.
pub fn init() -> std::io::Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "trackdeck.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init();

    tracing::info!(log_dir = %log_dir.display(), "trackdeck starting");
    Ok(log_dir)
}

/// Directory the rolling log files are written to.
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("trackdeck").join("logs")
}
