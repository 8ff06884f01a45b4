//! Command handlers for the battery-status CLI.
//!
//! Each handler takes an already-populated [`Battery`] sample and prints one
//! view of it through the [`TerminalRenderer`].

use anyhow::{Context, Result};
use battery_core::{display::BANNER, Attribute, Battery};
use clap::Args;
use log::info;

use crate::renderer::TerminalRenderer;

/// Print every readable attribute
///
/// Attributes that are missing or cannot be formatted are left out, so the
/// report only ever contains complete lines.
#[derive(Args)]
pub struct ReportArgs {
    /// Omit the "Battery Status" banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Print a single attribute
///
/// Accepts canonical names (capacity, status, health, temperature, voltage,
/// current, charge, technology) and legacy spellings such as chargeCounter.
#[derive(Args)]
pub struct GetArgs {
    /// Attribute name
    #[arg(help = "Attribute to show, e.g. capacity or temperature")]
    pub name: String,
    /// Print the stored value without display transforms
    #[arg(long)]
    pub raw: bool,
}

/// Command dispatcher over one battery sample.
pub struct Cli {
    battery: Battery,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(battery: Battery, renderer: TerminalRenderer) -> Self {
        Self { battery, renderer }
    }

    /// One-line `"76% [xx ]•"` summary.
    pub fn minimal(&self) -> Result<()> {
        info!("showing minimal summary");
        let summary = self.battery.summary();
        self.renderer
            .print_line(&summary.render(self.renderer.color_enabled()))
    }

    /// Multi-line report.
    pub fn report(&self, args: ReportArgs) -> Result<()> {
        info!("showing full report");
        let report = self.battery.report();
        if report.is_empty() {
            eprintln!("No battery information available.");
            return Ok(());
        }
        let banner = (!args.no_banner).then_some(BANNER);
        self.renderer.render_report(report, banner)
    }

    /// A single attribute, formatted unless `--raw`.
    pub fn get(&self, args: GetArgs) -> Result<()> {
        let attribute: Attribute = args
            .name
            .parse()
            .with_context(|| format!("Cannot show '{}'", args.name))?;

        let value = if args.raw {
            self.battery.typed(attribute).map(|v| v.to_string())
        } else {
            self.battery.formatted(attribute)
        };

        match value {
            Some(value) => self.renderer.print_line(&value),
            None => {
                info!("'{attribute}' has no value");
                Ok(())
            }
        }
    }

    /// The sample as JSON.
    pub fn json(&self) -> Result<()> {
        let json = self
            .battery
            .to_json()
            .context("Failed to encode battery sample")?;
        self.renderer.print_line(&json)
    }
}
