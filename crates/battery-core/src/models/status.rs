//! Charge status enumeration.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::BatteryError;

/// Type-safe enumeration of the kernel's power-supply status words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    /// Connected and charging
    Charging,

    /// Running on battery
    Discharging,

    /// Connected and fully charged
    Full,

    /// Connected but held below full
    NotCharging,

    /// The driver reports it does not know
    Unknown,
}

impl FromStr for ChargeStatus {
    type Err = BatteryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "charging" => Ok(ChargeStatus::Charging),
            "discharging" => Ok(ChargeStatus::Discharging),
            "full" => Ok(ChargeStatus::Full),
            "not charging" | "not_charging" => Ok(ChargeStatus::NotCharging),
            "unknown" => Ok(ChargeStatus::Unknown),
            _ => Err(BatteryError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }
}

impl ChargeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeStatus::Charging => "charging",
            ChargeStatus::Discharging => "discharging",
            ChargeStatus::Full => "full",
            ChargeStatus::NotCharging => "not charging",
            ChargeStatus::Unknown => "unknown",
        }
    }

    /// Icon glyph for this status.
    ///
    /// # Glyphs Used
    /// - `+` - charging
    /// - `#` - full
    /// - `x` - every other readable status
    ///
    /// An unreadable status has no `ChargeStatus` at all and renders as `?`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use battery_core::models::ChargeStatus;
    ///
    /// assert_eq!(ChargeStatus::Charging.glyph(), '+');
    /// assert_eq!(ChargeStatus::Full.glyph(), '#');
    /// assert_eq!(ChargeStatus::Discharging.glyph(), 'x');
    /// ```
    pub fn glyph(&self) -> char {
        match self {
            ChargeStatus::Charging => '+',
            ChargeStatus::Full => '#',
            ChargeStatus::Discharging | ChargeStatus::NotCharging | ChargeStatus::Unknown => 'x',
        }
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
