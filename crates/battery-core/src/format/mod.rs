//! Display transforms ("fancy formatting") for raw attribute values.
//!
//! A value passes through at most one transform of each kind, always in the
//! order case → decimal → prefix → suffix no matter how the registry lists
//! them. Decimal scaling needs the bare number, so it has to run before any
//! text is glued on.
//!
//! | kind      | parameter                              | effect                         |
//! |-----------|----------------------------------------|--------------------------------|
//! | `case`    | `capital`, `upper`, `lower`, `random`  | letter case                    |
//! | `decimal` | number of places                       | integer ÷ 10 per place         |
//! | `prefix`  | text                                   | `text + value`                 |
//! | `suffix`  | text                                   | `value + text`                 |
//!
//! Unknown kinds and unusable parameters are logged and skipped. A value the
//! decimal step cannot parse, or an empty value given to `capital`, makes the
//! whole result absent.
//!
//! ```rust
//! use battery_core::{format::FormatPipeline, registry::TransformSpec};
//!
//! let pipeline = FormatPipeline::seeded(1);
//! let transforms = [
//!     TransformSpec::new("suffix", "°C"),
//!     TransformSpec::new("decimal", "1"),
//! ];
//! assert_eq!(pipeline.apply("305", &transforms).as_deref(), Some("30.5°C"));
//! ```

pub mod case;
pub mod decimal;

use std::cell::RefCell;

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    error::{BatteryError, Result, ResultExt},
    registry::{TransformKind, TransformSpec},
};

pub use case::{capitalize, CaseMode};

/// Applies transform lists to raw values.
///
/// Owns the random source behind the `random` case mode so tests can seed it.
#[derive(Debug)]
pub struct FormatPipeline {
    rng: RefCell<StdRng>,
}

impl FormatPipeline {
    /// Pipeline whose random case mode is seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Pipeline with a reproducible random case mode.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Format `raw`, returning `None` if any required step failed.
    ///
    /// An empty transform list returns `raw` unchanged.
    pub fn apply(&self, raw: &str, transforms: &[TransformSpec]) -> Option<String> {
        self.try_apply(raw, transforms)
            .or_absent(&format!("format '{raw}'"))
    }

    /// Format `raw`, reporting why a value could not be produced.
    ///
    /// # Errors
    ///
    /// Returns `BatteryError::ParseFailure` when the decimal step gets a
    /// non-integer or the capital step gets an empty value. Unsupported
    /// kinds and invalid parameters never fail the value.
    pub fn try_apply(&self, raw: &str, transforms: &[TransformSpec]) -> Result<String> {
        let mut ordered: Vec<&TransformSpec> = transforms.iter().collect();
        ordered.sort_by(|a, b| a.kind.cmp(&b.kind));

        let mut value = raw.to_string();
        for transform in ordered {
            match self.step(&value, transform) {
                Ok(next) => value = next,
                Err(
                    e @ (BatteryError::UnsupportedTransform { .. }
                    | BatteryError::InvalidTransformParameter { .. }),
                ) => log::warn!("skipping transform: {e}"),
                Err(e) => return Err(e),
            }
        }
        Ok(value)
    }

    fn step(&self, value: &str, transform: &TransformSpec) -> Result<String> {
        let parameter = transform.parameter.as_str();
        match &transform.kind {
            TransformKind::Case => {
                let mode: CaseMode = parameter.parse()?;
                mode.apply(value, &mut *self.rng.borrow_mut())
            }
            TransformKind::Decimal => decimal::scale(value, decimal::parse_places(parameter)?),
            TransformKind::Prefix => Ok(format!("{parameter}{value}")),
            TransformKind::Suffix => Ok(format!("{value}{parameter}")),
            TransformKind::Unsupported(kind) => {
                Err(BatteryError::UnsupportedTransform { kind: kind.clone() })
            }
        }
    }
}

impl Default for FormatPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> FormatPipeline {
        FormatPipeline::seeded(42)
    }

    fn specs(pairs: &[(&str, &str)]) -> Vec<TransformSpec> {
        pairs.iter().map(|&(k, p)| TransformSpec::new(k, p)).collect()
    }

    #[test]
    fn test_empty_transform_list_is_identity() {
        assert_eq!(pipeline().apply("Li-ion", &[]).as_deref(), Some("Li-ion"));
        assert_eq!(pipeline().apply("  spaced ", &[]).as_deref(), Some("  spaced "));
    }

    #[test]
    fn test_suffix_and_prefix() {
        let transforms = specs(&[("prefix", "~"), ("suffix", "%")]);
        assert_eq!(pipeline().apply("76", &transforms).as_deref(), Some("~76%"));
    }

    #[test]
    fn test_fixed_evaluation_order() {
        // Declared suffix-first; decimal must still see the bare number.
        let transforms = specs(&[("suffix", " V"), ("prefix", "≈"), ("decimal", "2")]);
        assert_eq!(
            pipeline().apply("2345", &transforms).as_deref(),
            Some("≈23.45 V")
        );
    }

    #[test]
    fn test_case_runs_before_affixes() {
        let transforms = specs(&[("suffix", "!"), ("case", "upper"), ("prefix", "is ")]);
        assert_eq!(
            pipeline().apply("good", &transforms).as_deref(),
            Some("is GOOD!")
        );
    }

    #[test]
    fn test_decimal_on_non_numeric_is_absent() {
        let transforms = specs(&[("decimal", "1"), ("suffix", "°C")]);
        assert_eq!(pipeline().apply("warm", &transforms), None);
        assert!(matches!(
            pipeline().try_apply("warm", &transforms),
            Err(BatteryError::ParseFailure { .. })
        ));
    }

    #[test]
    fn test_decimal_zero_places_on_non_numeric_is_absent() {
        assert_eq!(pipeline().apply("n/a", &specs(&[("decimal", "0")])), None);
    }

    #[test]
    fn test_unsupported_transform_is_skipped() {
        let transforms = specs(&[("sparkle", "on"), ("suffix", "%")]);
        assert_eq!(pipeline().apply("50", &transforms).as_deref(), Some("50%"));
    }

    #[test]
    fn test_invalid_parameters_are_skipped() {
        let transforms = specs(&[("case", "title"), ("decimal", "lots"), ("suffix", "%")]);
        assert_eq!(pipeline().apply("50", &transforms).as_deref(), Some("50%"));
    }

    #[test]
    fn test_capital_on_empty_is_absent() {
        assert_eq!(pipeline().apply("", &specs(&[("case", "capital")])), None);
    }

    #[test]
    fn test_random_case_keeps_characters() {
        let input = "Not charging";
        let output = pipeline()
            .apply(input, &specs(&[("case", "random")]))
            .unwrap();
        assert_eq!(output.to_lowercase(), input.to_lowercase());
    }

    #[test]
    fn test_seeded_pipelines_agree() {
        let transforms = specs(&[("case", "random")]);
        let a = FormatPipeline::seeded(9).apply("discharging slowly", &transforms);
        let b = FormatPipeline::seeded(9).apply("discharging slowly", &transforms);
        assert_eq!(a, b);
    }
}
