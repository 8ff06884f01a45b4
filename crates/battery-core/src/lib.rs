//! Core library for reading and displaying battery status from sysfs.
//!
//! This crate reads power-supply attribute files, keeps them as a one-shot
//! sample, and renders that sample either as a multi-line report or as a
//! compact capacity-and-icon summary.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Registry     │    │     Battery     │    │     Display     │
//! │ (name → source, │───▶│ (read_all, raw, │───▶│ (Icon, Summary, │
//! │   transforms)   │    │ typed, format)  │    │     Report)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Nothing in the pipeline fails loudly. An unreadable file, a value a
//! transform cannot parse, or an unknown transform all end up as an absent
//! value, which the report omits and the icon shows as `?`.
//!
//! Diagnostics go through the [`log`] facade only; the host installs (or
//! does not install) a logger.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use battery_core::BatteryBuilder;
//!
//! let mut battery = BatteryBuilder::new().build();
//! battery.read_all();
//!
//! if let Some(capacity) = battery.get_formatted("capacity") {
//!     println!("Capacity: {capacity}");
//! }
//! println!("{}", battery.summary());
//! ```

pub mod battery;
pub mod display;
pub mod error;
pub mod format;
pub mod models;
pub mod reader;
pub mod registry;

// Re-export commonly used types
pub use battery::{Battery, BatteryBuilder};
pub use display::{Icon, Report, Summary};
pub use error::{BatteryError, Result};
pub use format::FormatPipeline;
pub use models::{Attribute, AttributeValue, ChargeStatus};
pub use reader::read_value;
pub use registry::{AttributeSpec, Registry, TransformKind, TransformSpec};
