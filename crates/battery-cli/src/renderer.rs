//! Terminal rendering module
//!
//! This module prints battery output, using termimad for the styled banner
//! when colour is enabled and falling back to plain text otherwise.

use std::io::{self, Write};

use anyhow::{Context, Result};
use battery_core::Report;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Blue);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Whether ANSI colour should be emitted.
    pub fn color_enabled(&self) -> bool {
        self.rich_enabled
    }

    /// Print one line of already-formatted text.
    pub fn print_line(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}").context("Failed to write to stdout")
    }

    /// Print a report, optionally under a banner.
    ///
    /// In rich mode the banner is drawn by termimad and attribute names are
    /// coloured; in plain mode the report carries its own text banner.
    pub fn render_report(&self, report: Report, banner: Option<&str>) -> Result<()> {
        let report = report.with_color(self.rich_enabled);
        let report = match banner {
            Some(banner) if self.rich_enabled => {
                self.skin.print_inline(&format!("**{banner}**"));
                println!();
                report
            }
            Some(banner) => report.with_banner(banner),
            None => report,
        };

        let mut stdout = io::stdout().lock();
        write!(stdout, "{report}").context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
