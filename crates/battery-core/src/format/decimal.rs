//! Fixed-point scaling of integer sysfs readings.

use crate::error::{BatteryError, Result};

/// Parse the `decimal` transform parameter.
///
/// # Errors
///
/// Returns `BatteryError::InvalidTransformParameter` unless `parameter` is a
/// non-negative integer.
pub fn parse_places(parameter: &str) -> Result<u32> {
    parameter
        .trim()
        .parse::<u32>()
        .map_err(|_| BatteryError::invalid_parameter("decimal", parameter))
}

/// Interpret `value` as an integer, divide it by ten `places` times and
/// render it with exactly `places` fractional digits.
///
/// The division is repeated rather than done once by `10^places`, so the
/// rounding matches the readings this has always produced.
///
/// # Errors
///
/// Returns `BatteryError::ParseFailure` if `value` is not an integer.
///
/// # Examples
///
/// ```rust
/// use battery_core::format::decimal::scale;
///
/// assert_eq!(scale("2345", 2).unwrap(), "23.45");
/// assert_eq!(scale("305", 1).unwrap(), "30.5");
/// assert!(scale("Good", 1).is_err());
/// ```
pub fn scale(value: &str, places: u32) -> Result<String> {
    let number: i64 = value.trim().parse().map_err(|e| {
        BatteryError::parse_failure(value).with_reason(format!("not an integer: {e}"))
    })?;

    let mut scaled = number as f64;
    for _ in 0..places {
        scaled /= 10.0;
    }
    Ok(format!("{scaled:.prec$}", prec = places as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterative_scaling() {
        assert_eq!(scale("2345", 2).unwrap(), "23.45");
        assert_eq!(scale("4123456", 6).unwrap(), "4.123456");
        assert_eq!(scale("-1234567", 3).unwrap(), "-1234.567");
    }

    #[test]
    fn test_zero_places_keeps_integer() {
        assert_eq!(scale("76", 0).unwrap(), "76");
    }

    #[test]
    fn test_small_values_are_zero_padded() {
        assert_eq!(scale("5", 2).unwrap(), "0.05");
        assert_eq!(scale("0", 1).unwrap(), "0.0");
    }

    #[test]
    fn test_non_numeric_fails() {
        assert!(matches!(
            scale("Good", 1),
            Err(BatteryError::ParseFailure { .. })
        ));
        assert!(scale("", 0).is_err());
        assert!(scale("4.2", 1).is_err());
    }

    #[test]
    fn test_parse_places() {
        assert_eq!(parse_places("3").unwrap(), 3);
        assert!(parse_places("-1").is_err());
        assert!(parse_places("two").is_err());
    }
}
