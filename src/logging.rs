//! Tracing setup. The terminal belongs to the TUI, so events go to a log file
//! through a non-blocking writer instead of stderr.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber writing to `log_path`.
///
/// `RUST_LOG` overrides `level` when set. Keep the returned guard alive for
/// as long as events should be flushed.
pub fn init_tracing(level: &str, log_path: &Path) -> Result<WorkerGuard> {
    let appender = open_appender(log_path)?;
    let filter = build_filter(level, env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(false))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

/// Create the log directory and open `log_path` for appending, without
/// rotation.
fn open_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let directory = log_path
        .parent()
        .ok_or_else(|| anyhow!("log path {} has no parent", log_path.display()))?;
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("log path {} has no file name", log_path.display()))?;

    fs::create_dir_all(directory).context("failed to create log directory")?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .with_context(|| format!("failed to open log file {}", log_path.display()))
}

/// Pick the filter directive: a valid `env_directive` (the `RUST_LOG` value)
/// wins, otherwise `level` must parse.
fn build_filter(level: &str, env_directive: Option<&str>) -> Result<EnvFilter> {
    if let Some(filter) = env_directive.and_then(|directive| EnvFilter::try_new(directive).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))
}
