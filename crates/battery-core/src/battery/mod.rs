//! The battery sample: one point-in-time read of every registered attribute.
//!
//! ```rust,no_run
//! use battery_core::BatteryBuilder;
//!
//! let mut battery = BatteryBuilder::new().with_supply(Some("BAT0")).build();
//! battery.read_all();
//!
//! println!("{}", battery.summary());
//! print!("{}", battery.report());
//! ```

pub mod builder;

use std::collections::HashMap;

use jiff::Timestamp;
use log::{debug, info};
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    display::{Icon, Report, Summary},
    error::Result,
    format::{capitalize, FormatPipeline},
    models::{Attribute, AttributeValue},
    reader::read_value,
    registry::Registry,
};

pub use builder::{BatteryBuilder, DEFAULT_SUPPLY, DEFAULT_SYSFS_ROOT};

/// Raw values for the attributes of one registry, read in one pass.
///
/// Only attributes present in the registry are ever stored, and an
/// unreadable attribute is left unset rather than stored as empty text.
#[derive(Debug)]
pub struct Battery {
    registry: Registry,
    pipeline: FormatPipeline,
    values: HashMap<Attribute, String>,
    sampled_at: Option<Timestamp>,
}

impl Battery {
    /// Creates an empty sample over `registry`.
    pub fn new(registry: Registry, pipeline: FormatPipeline) -> Self {
        Self {
            registry,
            pipeline,
            values: HashMap::new(),
            sampled_at: None,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// When [`Battery::read_all`] last ran.
    pub fn sampled_at(&self) -> Option<Timestamp> {
        self.sampled_at
    }

    /// Read every registered attribute, replacing any previous sample.
    ///
    /// Individual failures leave that attribute unset and never stop the pass.
    pub fn read_all(&mut self) {
        info!("battery data read started");
        self.values.clear();

        for spec in &self.registry {
            match read_value(&spec.source) {
                Some(raw) => {
                    debug!("'{}' = {}", spec.name(), raw);
                    self.values.insert(spec.attribute, raw);
                }
                None => debug!("'{}' data read unsuccessful", spec.name()),
            }
        }

        self.sampled_at = Some(Timestamp::now());
        info!(
            "battery data read complete: {}/{} attributes",
            self.values.len(),
            self.registry.len()
        );
    }

    /// Raw trimmed text stored for `attribute`.
    pub fn raw(&self, attribute: Attribute) -> Option<&str> {
        self.values.get(&attribute).map(String::as_str)
    }

    /// Stored value as an integer when it parses as one, otherwise as text.
    pub fn typed(&self, attribute: Attribute) -> Option<AttributeValue> {
        self.raw(attribute).map(AttributeValue::from_raw)
    }

    /// [`Battery::typed`] by name or legacy alias; unknown names are absent.
    pub fn get_typed(&self, name: &str) -> Option<AttributeValue> {
        name.parse::<Attribute>()
            .ok()
            .and_then(|attribute| self.typed(attribute))
    }

    /// Stored value passed through the attribute's registered transforms.
    pub fn formatted(&self, attribute: Attribute) -> Option<String> {
        let spec = self.registry.get(attribute)?;
        let value = self.typed(attribute)?;
        self.pipeline.apply(&value.to_string(), &spec.transforms)
    }

    /// [`Battery::formatted`] by name or legacy alias; unknown names are absent.
    pub fn get_formatted(&self, name: &str) -> Option<String> {
        name.parse::<Attribute>()
            .ok()
            .and_then(|attribute| self.formatted(attribute))
    }

    /// `(display name, formatted value)` for every attribute that resolves,
    /// in registry order.
    pub fn report_entries(&self) -> Vec<(String, String)> {
        self.registry
            .iter()
            .filter_map(|spec| {
                let value = self.formatted(spec.attribute)?;
                let name = capitalize(spec.name())?;
                Some((name, value))
            })
            .collect()
    }

    /// `"<Name>: <value>"` for every attribute that resolves, in registry order.
    pub fn report_lines(&self) -> Vec<String> {
        self.report_entries()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect()
    }

    /// Multi-line report of this sample.
    pub fn report(&self) -> Report {
        Report::new(self.report_entries())
    }

    /// Icon for the stored status and capacity.
    pub fn icon(&self) -> Icon {
        let capacity = self
            .typed(Attribute::Capacity)
            .and_then(|value| value.as_int());
        Icon::new(self.raw(Attribute::Status), capacity)
    }

    /// One-line `"<capacity> <icon>"` summary.
    pub fn summary(&self) -> Summary {
        Summary::new(self.formatted(Attribute::Capacity), self.icon())
    }

    /// JSON object with the sample time and every stored typed value.
    ///
    /// # Errors
    ///
    /// Returns `BatteryError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&SampleJson { battery: self })?)
    }
}

struct SampleJson<'a> {
    battery: &'a Battery,
}

impl Serialize for SampleJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("sampled_at", &self.battery.sampled_at)?;
        map.serialize_entry("attributes", &TypedValues(self.battery))?;
        map.end()
    }
}

/// Stored typed values keyed by name, in registry order.
struct TypedValues<'a>(&'a Battery);

impl Serialize for TypedValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for spec in self.0.registry() {
            if let Some(value) = self.0.typed(spec.attribute) {
                map.serialize_entry(spec.name(), &value)?;
            }
        }
        map.end()
    }
}
