//! Logging setup for lnka.
//!
//! Logs always go to `~/.cache/lnka/lnka.log` (or the platform cache dir).
//! The interactive picker owns the terminal, so stderr output is only added
//! when `LNKA_LOG` is set explicitly.
//!
//! ```bash
//! # Debug a session
//! lnka --debug /etc/nginx/sites-available /etc/nginx/sites-enabled
//!
//! # Any EnvFilter directive works
//! LNKA_LOG=lnka::links=trace lnka status ./available ./enabled
//!
//! tail -f ~/.cache/lnka/lnka.log
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::{self, format::FmtSpan}, prelude::*, EnvFilter};

const LOG_ENV: &str = "LNKA_LOG";

/// Install the global subscriber.
///
/// `LNKA_LOG` wins over `debug`. The returned guard flushes the file writer
/// on drop and must be held until exit.
pub fn init_logging(debug: bool) -> Result<WorkerGuard> {
    let log_file = log_file_path().context("Failed to determine cache directory")?;
    if let Some(dir) = log_file.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create cache directory: {}", dir.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let log_env = std::env::var(LOG_ENV).ok();
    let to_stderr = log_env.is_some();
    let filter = log_env.unwrap_or_else(|| default_level(debug).to_string());

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
    });

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(&filter))
        .with(file_layer)
        .with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")?;

    Ok(guard)
}

/// Where the log file lives.
pub fn log_file_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "lnka").map(|dirs| dirs.cache_dir().join("lnka.log"))
}

fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}
