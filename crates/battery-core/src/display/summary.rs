//! One-line capacity-and-icon summary.

use std::fmt;

use super::Icon;

/// `"<formatted capacity> <icon>"`, or just the icon when capacity is absent.
///
/// # Examples
///
/// ```rust
/// use battery_core::display::{Icon, Summary};
///
/// let summary = Summary::new(Some("76%".to_string()), Icon::new(Some("Discharging"), Some(76)));
/// assert_eq!(summary.to_string(), "76% [xx ]•");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub capacity: Option<String>,
    pub icon: Icon,
}

impl Summary {
    pub fn new(capacity: Option<String>, icon: Icon) -> Self {
        Self { capacity, icon }
    }

    pub fn render(&self, color: bool) -> String {
        let icon = self.icon.render(color);
        match &self.capacity {
            Some(capacity) => format!("{capacity} {icon}"),
            None => icon,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
