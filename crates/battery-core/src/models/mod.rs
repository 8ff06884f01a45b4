//! Data models for battery samples.
//!
//! - [`attribute`]: the closed set of attribute identifiers
//! - [`value`]: the integer-or-text value returned by typed access
//! - [`status`]: charge status words and their icon glyphs

pub mod attribute;
pub mod status;
pub mod value;

#[cfg(test)]
mod tests;

pub use attribute::Attribute;
pub use status::ChargeStatus;
pub use value::AttributeValue;
