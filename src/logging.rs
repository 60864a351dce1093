//! Log setup.
//!
//! The terminal belongs to the dashboard, so logs only go to a file. With
//! no log file configured no subscriber is installed and `tracing` events
//! are dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG` if set, else from `default_filter`.
pub fn env_filter(default_filter: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {:?}", default_filter)),
    }
}

/// Install a global subscriber appending to `log_file`.
pub fn init(log_file: Option<&Path>, default_filter: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
