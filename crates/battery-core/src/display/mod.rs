//! Rendering of battery samples for the terminal.
//!
//! - [`icon`]: the bracketed status/capacity icon (`[xx ]•`)
//! - [`summary`]: the one-line `"76% [xx ]•"` form
//! - [`report`]: the multi-line `"Name: value"` form
//!
//! All three are pure: they take already-read values and never touch sysfs,
//! so they can be driven with synthetic input.

pub mod icon;
pub mod report;
pub mod summary;

pub use icon::{CapacityBand, Icon};
pub use report::{Report, BANNER};
pub use summary::Summary;
