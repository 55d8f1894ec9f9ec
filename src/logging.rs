//! Log setup. The TUI owns the terminal, so log lines go to a file under the
//! data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Name of the log file inside the data directory.
pub const LOG_FILE: &str = "noted.log";

/// Install the global tracing subscriber, appending to `noted.log` in the
/// data directory. `NOTED_LOG` overrides the default `info` filter.
pub fn initialize() -> Result<()> {
    let data_dir = app_dirs::get_data_dir()?;
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    let log_path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env("NOTED_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
