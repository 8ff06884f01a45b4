//! Battery status CLI
//!
//! Reads one sample of the battery's sysfs attributes and prints it as a
//! one-line summary, a full report, a single attribute, or JSON.

mod args;
mod cli;
mod logging;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use battery_core::BatteryBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    let Args {
        sysfs_root,
        supply,
        no_color,
        log_file,
        seed,
        command,
    } = Args::parse();

    logging::init(log_file)?;
    info!("battery-status started");

    let mut battery = BatteryBuilder::new()
        .with_sysfs_root(sysfs_root)
        .with_supply(supply)
        .with_seed(seed)
        .build();
    battery.read_all();

    let cli = Cli::new(battery, TerminalRenderer::new(!no_color));

    match command {
        Some(Minimal) | None => cli.minimal(),
        Some(Report(args)) => cli.report(args),
        Some(Get(args)) => cli.get(args),
        Some(Json) => cli.json(),
    }
}
