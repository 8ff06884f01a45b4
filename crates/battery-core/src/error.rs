//! Error types for the battery core library.
//!
//! Most of these never reach a caller: the public read, format and render
//! operations log them and surface plain absence instead. They exist so the
//! internal steps can use `?` and so the log says *why* a value went missing.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for battery attribute operations.
#[derive(Error, Debug)]
pub enum BatteryError {
    /// Source file missing, unreadable, or failing mid-read
    #[error("Source '{path}' unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Source file opened but had no first line
    #[error("Source '{path}' is empty")]
    EmptySource { path: PathBuf },
    /// Non-numeric value where a numeric transform needs one
    #[error("Cannot parse '{value}': {reason}")]
    ParseFailure { value: String, reason: String },
    /// Registry references a transform kind the pipeline does not implement
    #[error("Unsupported transform '{kind}'")]
    UnsupportedTransform { kind: String },
    /// Known transform kind with a parameter it cannot use
    #[error("Invalid parameter '{parameter}' for transform '{kind}'")]
    InvalidTransformParameter { kind: String, parameter: String },
    /// Name that matches no registered attribute or alias
    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },
    /// The same attribute registered twice
    #[error("Attribute '{name}' is registered more than once")]
    DuplicateAttribute { name: String },
    /// Status word outside the known set
    #[error("Unknown battery status '{value}'")]
    UnknownStatus { value: String },
    /// Serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating parse failure errors.
pub struct ParseFailureBuilder {
    value: String,
}

impl ParseFailureBuilder {
    /// Create a new parse failure builder for a value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BatteryError {
        BatteryError::ParseFailure {
            value: self.value,
            reason: reason.into(),
        }
    }
}

impl BatteryError {
    /// Creates a builder for parse failures.
    pub fn parse_failure(value: impl Into<String>) -> ParseFailureBuilder {
        ParseFailureBuilder::new(value)
    }

    /// Creates an invalid transform parameter error.
    pub fn invalid_parameter(kind: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::InvalidTransformParameter {
            kind: kind.into(),
            parameter: parameter.into(),
        }
    }

    /// Whether this error is an expected absence rather than a misconfiguration.
    ///
    /// Missing sources are routine on hardware that does not expose every
    /// attribute, so callers log them quieter than the rest.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            BatteryError::SourceUnavailable { .. } | BatteryError::EmptySource { .. }
        )
    }
}

/// Extension trait turning an internal `Result` into the absence-only
/// signal exposed at the public boundary.
pub trait ResultExt<T> {
    /// Log the error under `context` and discard it.
    fn or_absent(self, context: &str) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_absent(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) if e.is_absence() => {
                log::debug!("{context}: {e}");
                None
            }
            Err(e @ (BatteryError::UnsupportedTransform { .. }
            | BatteryError::InvalidTransformParameter { .. })) => {
                log::warn!("{context}: {e}");
                None
            }
            Err(e) => {
                log::debug!("{context}: {e}");
                None
            }
        }
    }
}

/// Result type alias for battery operations
pub type Result<T> = std::result::Result<T, BatteryError>;
