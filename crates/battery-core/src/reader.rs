//! Single-line reads from sysfs attribute files.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{BatteryError, Result, ResultExt};

/// Read the first line of `path`, trimmed.
///
/// # Errors
///
/// Returns `BatteryError::SourceUnavailable` when the file cannot be opened
/// or read, and `BatteryError::EmptySource` when there is no first line or
/// it is blank after trimming.
pub fn try_read_value(path: &Path) -> Result<String> {
    let unavailable = |source| BatteryError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(unavailable)?;

    let value = line.trim();
    if value.is_empty() {
        return Err(BatteryError::EmptySource {
            path: path.to_path_buf(),
        });
    }
    Ok(value.to_string())
}

/// Read the first line of `path`, or `None` if it is missing, unreadable or
/// empty. Never retries.
pub fn read_value(path: &Path) -> Option<String> {
    try_read_value(path).or_absent(&format!("read {}", path.display()))
}
