//! Fixed-width battery icon.

use std::fmt;

use log::debug;

use crate::models::ChargeStatus;

/// Glyph used when the status could not be read.
pub const UNKNOWN_GLYPH: char = '?';

const RESET: &str = "\x1b[0m";

/// Capacity band deciding how many glyphs fill the icon body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityBand {
    /// 80 and above
    High,
    /// 35 to 79
    Medium,
    /// 15 to 34
    Low,
    /// Below 15
    Critical,
}

impl CapacityBand {
    pub fn from_capacity(capacity: i64) -> Self {
        match capacity {
            c if c >= 80 => CapacityBand::High,
            c if c >= 35 => CapacityBand::Medium,
            c if c >= 15 => CapacityBand::Low,
            _ => CapacityBand::Critical,
        }
    }

    fn body(self, glyph: char) -> String {
        match self {
            CapacityBand::High => format!("{glyph}{glyph}{glyph}"),
            CapacityBand::Medium => format!("{glyph}{glyph} "),
            CapacityBand::Low => format!("{glyph}  "),
            CapacityBand::Critical => format!(" {glyph} "),
        }
    }

    fn color(self) -> &'static str {
        match self {
            CapacityBand::High => "\x1b[32m",
            CapacityBand::Medium => "\x1b[33m",
            CapacityBand::Low => "\x1b[31m",
            CapacityBand::Critical => "\x1b[1;31m",
        }
    }
}

/// Bracketed three-character summary of charge status and capacity.
///
/// The glyph comes from the status (`+` charging, `#` full, `x` any other
/// readable status, `?` unreadable) and the fill from the capacity band.
///
/// # Examples
///
/// ```rust
/// use battery_core::display::Icon;
///
/// assert_eq!(Icon::new(Some("Discharging"), Some(55)).to_string(), "[xx ]•");
/// assert_eq!(Icon::new(Some("Charging"), Some(90)).to_string(), "[+++]•");
/// assert_eq!(Icon::new(None, None).to_string(), "[ ? ]•");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub glyph: char,
    pub band: Option<CapacityBand>,
}

impl Icon {
    /// Build an icon from a raw status word and an integer capacity.
    pub fn new(status: Option<&str>, capacity: Option<i64>) -> Self {
        Self {
            glyph: glyph_for(status),
            band: capacity.map(CapacityBand::from_capacity),
        }
    }

    /// The three characters between the brackets.
    pub fn body(&self) -> String {
        match self.band {
            Some(band) => band.body(self.glyph),
            None => format!(" {} ", self.glyph),
        }
    }

    /// Render as text, wrapped in an ANSI colour for the band if `color`.
    pub fn render(&self, color: bool) -> String {
        let icon = format!("[{}]•", self.body());
        match self.band {
            Some(band) if color => format!("{}{icon}{RESET}", band.color()),
            _ => icon,
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Render an icon straight from a status word and capacity.
pub fn render(status: Option<&str>, capacity: Option<i64>, color: bool) -> String {
    Icon::new(status, capacity).render(color)
}

fn glyph_for(status: Option<&str>) -> char {
    let Some(status) = status else {
        return UNKNOWN_GLYPH;
    };
    match status.parse::<ChargeStatus>() {
        Ok(status) => status.glyph(),
        Err(e) => {
            debug!("{e}, treating as not charging");
            'x'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discharging_thresholds() {
        assert_eq!(render(Some("discharging"), Some(80), false), "[xxx]•");
        assert_eq!(render(Some("discharging"), Some(55), false), "[xx ]•");
        assert_eq!(render(Some("discharging"), Some(33), false), "[x  ]•");
        assert_eq!(render(Some("discharging"), Some(10), false), "[ x ]•");
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(render(Some("Discharging"), Some(79), false), "[xx ]•");
        assert_eq!(render(Some("Discharging"), Some(35), false), "[xx ]•");
        assert_eq!(render(Some("Discharging"), Some(34), false), "[x  ]•");
        assert_eq!(render(Some("Discharging"), Some(15), false), "[x  ]•");
        assert_eq!(render(Some("Discharging"), Some(14), false), "[ x ]•");
        assert_eq!(render(Some("Discharging"), Some(0), false), "[ x ]•");
        assert_eq!(render(Some("Discharging"), Some(100), false), "[xxx]•");
    }

    #[test]
    fn test_charging_thresholds() {
        assert_eq!(render(Some("charging"), Some(90), false), "[+++]•");
        assert_eq!(render(Some("charging"), Some(5), false), "[ + ]•");
    }

    #[test]
    fn test_full_has_its_own_glyph() {
        assert_eq!(render(Some("Full"), Some(100), false), "[###]•");
    }

    #[test]
    fn test_unrecognised_status_renders_as_not_charging() {
        assert_eq!(render(Some("Unknown"), Some(50), false), "[xx ]•");
        assert_eq!(render(Some("Sparkling"), Some(50), false), "[xx ]•");
    }

    #[test]
    fn test_absent_inputs() {
        assert_eq!(render(None, None, false), "[ ? ]•");
        assert_eq!(render(None, None, true), "[ ? ]•");
        assert_eq!(render(Some("Charging"), None, false), "[ + ]•");
        assert_eq!(render(None, Some(90), false), "[???]•");
    }

    #[test]
    fn test_color_wraps_icon() {
        let colored = render(Some("Charging"), Some(90), true);
        assert!(colored.starts_with("\x1b[32m"));
        assert!(colored.contains("[+++]•"));
        assert!(colored.ends_with(RESET));
    }
}
