// Logging - tracing subscriber setup
//
// The host owns the terminal while a form is open, so tracing output goes to
// a file when one is configured and is dropped otherwise.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::constants::DEFAULT_LOG_DIRECTIVE;

/// Build the filter from `RUST_LOG`, falling back to `chipbox=info`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// Install the global subscriber. Without a log file nothing is recorded.
pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_log::LogTracer::init().context("Failed to bridge log records")?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
