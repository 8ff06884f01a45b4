use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GetArgs, ReportArgs};

/// Battery status from sysfs, as a full report or a one-line icon summary
///
/// Reads the attribute files of one power supply (capacity, status, health,
/// temperature, voltage, current, charge counter, technology) and prints
/// them. Missing attributes are skipped rather than reported as errors.
#[derive(Parser)]
#[command(version, about, name = "battery-status")]
pub struct Args {
    /// Power-supply class directory. Defaults to /sys/class/power_supply
    #[arg(long, global = true)]
    pub sysfs_root: Option<PathBuf>,

    /// Supply directory under the root, e.g. BAT0. Defaults to `battery`
    #[arg(long, global = true)]
    pub supply: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Write debug logs to a file. Without a value, logs go to
    /// $XDG_STATE_HOME/battery-status/battery_status.log
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<Option<PathBuf>>,

    /// Seed for the random case transform
    #[arg(long, global = true, hide = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available output modes
///
/// Without a command the one-line summary is printed.
#[derive(Subcommand)]
pub enum Commands {
    /// Print capacity and the battery icon on one line
    #[command(alias = "m")]
    Minimal,
    /// Print every readable attribute, one per line
    #[command(aliases = ["r", "all"])]
    Report(ReportArgs),
    /// Print a single attribute
    #[command(alias = "g")]
    Get(GetArgs),
    /// Print the sample as JSON
    Json,
}
