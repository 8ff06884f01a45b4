//! Enumerated identifiers for battery attributes.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::BatteryError;

/// One named piece of battery telemetry.
///
/// Variants are declared in canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Capacity,
    Status,
    Health,
    Temperature,
    Voltage,
    Current,
    Charge,
    Technology,
}

impl Attribute {
    /// Every attribute, in canonical order.
    pub const ALL: [Attribute; 8] = [
        Attribute::Capacity,
        Attribute::Status,
        Attribute::Health,
        Attribute::Temperature,
        Attribute::Voltage,
        Attribute::Current,
        Attribute::Charge,
        Attribute::Technology,
    ];

    /// Canonical lowercase name used as the lookup key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Capacity => "capacity",
            Attribute::Status => "status",
            Attribute::Health => "health",
            Attribute::Temperature => "temperature",
            Attribute::Voltage => "voltage",
            Attribute::Current => "current",
            Attribute::Charge => "charge",
            Attribute::Technology => "technology",
        }
    }

    /// File name of the attribute inside a power-supply directory.
    pub fn source_file(&self) -> &'static str {
        match self {
            Attribute::Capacity => "capacity",
            Attribute::Status => "status",
            Attribute::Health => "health",
            Attribute::Temperature => "temp",
            Attribute::Voltage => "voltage_now",
            Attribute::Current => "current_now",
            Attribute::Charge => "charge_counter",
            Attribute::Technology => "technology",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = BatteryError;

    /// Accepts the canonical name plus the legacy spellings older tables used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "capacity" => Ok(Attribute::Capacity),
            "status" => Ok(Attribute::Status),
            "health" => Ok(Attribute::Health),
            "temperature" | "temp" => Ok(Attribute::Temperature),
            "voltage" | "voltage_now" | "voltageNow" => Ok(Attribute::Voltage),
            "current" | "current_now" | "currentNow" => Ok(Attribute::Current),
            "charge" | "charge_counter" | "chargeCounter" | "chargeCount" => {
                Ok(Attribute::Charge)
            }
            "technology" => Ok(Attribute::Technology),
            _ => Err(BatteryError::UnknownAttribute {
                name: s.to_string(),
            }),
        }
    }
}
