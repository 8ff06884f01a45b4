//! Dual-typed attribute values.

use std::fmt;

use serde::Serialize;

/// A stored raw value after the integer-or-text decision.
///
/// Numeric attributes come back as [`AttributeValue::Int`] and textual ones
/// as [`AttributeValue::Text`] from the same accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Int(i64),
    Text(String),
}

impl AttributeValue {
    /// Parse a raw string, falling back to the unmodified text.
    pub fn from_raw(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) => AttributeValue::Int(n),
            Err(_) => AttributeValue::Text(raw.to_string()),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(n) => Some(*n),
            AttributeValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Int(_) => None,
            AttributeValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Int(n) => write!(f, "{n}"),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}
