//! Tracing setup
//!
//! The terminal belongs to the TUI while it runs, so log lines go to
//! `portal-tui.log` in the config directory instead of stderr.

use crate::config::config_dir;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "portal-tui.log";

const DEFAULT_FILTER: &str = "portal_tui=info";

/// Install the global subscriber. Without a writable config directory
/// events are discarded.
pub fn init_logging() {
    let writer: Box<dyn Write + Send> = match config_dir().map(|dir| open_log_file(&dir)) {
        Some(Ok(file)) => Box::new(file),
        _ => Box::new(io::sink()),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(writer)),
        )
        .init();
}

/// Open the log file in `dir` for appending, creating both as needed
pub fn open_log_file(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
}
