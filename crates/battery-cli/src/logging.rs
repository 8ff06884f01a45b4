//! Logger setup.
//!
//! Logs go to stderr at the `RUST_LOG` level (errors only by default). With
//! `--log-file` they go to a file instead, at debug level.

use std::{fs::OpenOptions, path::PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

const LOG_PREFIX: &str = "battery-status";
const LOG_FILE_NAME: &str = "battery_status.log";

/// Install the global logger.
///
/// `log_file` is `None` without the flag, `Some(None)` for the flag with no
/// path, and `Some(Some(path))` for an explicit path.
pub fn init(log_file: Option<Option<PathBuf>>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("error"));

    if let Some(path) = log_file {
        let path = match path {
            Some(path) => path,
            None => default_log_path()?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        builder
            .target(Target::Pipe(Box::new(file)))
            .filter_level(LevelFilter::Debug);
    }

    builder.try_init().context("Failed to initialize logger")
}

/// Returns the default log path following the XDG Base Directory
/// specification.
fn default_log_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(LOG_PREFIX)
        .place_state_file(LOG_FILE_NAME)
        .context("Failed to resolve XDG state directory")
}
