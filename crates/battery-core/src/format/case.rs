//! Letter-case transforms.

use std::str::FromStr;

use rand::Rng;

use crate::error::{BatteryError, Result};

/// Case conversion modes accepted by the `case` transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// First character upper-cased, the rest lower-cased
    Capital,
    Upper,
    Lower,
    /// Each character independently upper- or lower-cased
    Random,
}

impl FromStr for CaseMode {
    type Err = BatteryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "capital" => Ok(CaseMode::Capital),
            "upper" => Ok(CaseMode::Upper),
            "lower" => Ok(CaseMode::Lower),
            "random" => Ok(CaseMode::Random),
            _ => Err(BatteryError::invalid_parameter("case", s)),
        }
    }
}

impl CaseMode {
    /// Apply this mode to `value`, drawing from `rng` for [`CaseMode::Random`].
    ///
    /// # Errors
    ///
    /// Returns `BatteryError::ParseFailure` for [`CaseMode::Capital`] on an
    /// empty value.
    pub fn apply<R: Rng + ?Sized>(self, value: &str, rng: &mut R) -> Result<String> {
        match self {
            CaseMode::Capital => capitalize(value).ok_or_else(|| {
                BatteryError::parse_failure(value).with_reason("cannot capitalize an empty value")
            }),
            CaseMode::Upper => Ok(value.to_uppercase()),
            CaseMode::Lower => Ok(value.to_lowercase()),
            CaseMode::Random => Ok(value
                .chars()
                .map(|c| {
                    if rng.gen_bool(0.5) {
                        c.to_uppercase().collect::<String>()
                    } else {
                        c.to_lowercase().collect::<String>()
                    }
                })
                .collect()),
        }
    }
}

/// Upper-case the first character and lower-case the rest; `None` if empty.
pub fn capitalize(value: &str) -> Option<String> {
    let mut chars = value.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect())
}
