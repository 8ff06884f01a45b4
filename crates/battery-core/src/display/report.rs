//! Multi-line attribute report.

use std::fmt;

/// Default banner text.
pub const BANNER: &str = "Battery Status";

const NAME_COLOR: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Wrapper type for displaying a full report.
///
/// One `"<Name>: <value>"` line per entry, optionally under a banner, with
/// optionally coloured names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<(String, String)>,
    banner: Option<String>,
    color: bool,
}

impl Report {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self {
            entries,
            banner: None,
            color: false,
        }
    }

    /// Prefix the report with a banner and rule.
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Colour attribute names with ANSI escapes.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(banner) = &self.banner {
            writeln!(f, "{banner}")?;
            writeln!(f, "{}", "=".repeat(banner.chars().count()))?;
        }
        for (name, value) in &self.entries {
            if self.color {
                writeln!(f, "{NAME_COLOR}{name}{RESET}: {value}")?;
            } else {
                writeln!(f, "{name}: {value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<(String, String)> {
        vec![
            ("Capacity".to_string(), "76%".to_string()),
            ("Status".to_string(), "Discharging".to_string()),
        ]
    }

    #[test]
    fn test_plain_report() {
        let report = Report::new(entries());
        assert_eq!(report.to_string(), "Capacity: 76%\nStatus: Discharging\n");
    }

    #[test]
    fn test_report_with_banner() {
        let output = Report::new(entries()).with_banner(BANNER).to_string();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Battery Status");
        assert_eq!(lines[1], "==============");
        assert_eq!(lines[2], "Capacity: 76%");
    }

    #[test]
    fn test_colored_names() {
        let output = Report::new(entries()).with_color(true).to_string();
        assert!(output.contains("\x1b[34mCapacity\x1b[0m: 76%"));
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }
}
