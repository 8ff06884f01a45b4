//! Attribute registry: which file each attribute is read from and how its
//! value is dressed up for display.
//!
//! A [`Registry`] is built once and never mutated. Iteration follows the
//! order the specs were given in, which is also the order of report lines.
//!
//! ```rust
//! use battery_core::{Attribute, Registry};
//!
//! let registry = Registry::standard("/sys/class/power_supply/battery");
//! let capacity = registry.get(Attribute::Capacity).unwrap();
//! assert!(capacity.source.ends_with("capacity"));
//! ```

use std::{
    collections::HashSet,
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    error::{BatteryError, Result},
    models::Attribute,
};

/// The kinds of display transform the format pipeline knows about.
///
/// Declaration order is evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransformKind {
    Case,
    Decimal,
    Prefix,
    Suffix,
    /// A kind this pipeline does not implement; skipped when applied.
    Unsupported(String),
}

impl From<&str> for TransformKind {
    fn from(kind: &str) -> Self {
        match kind {
            "case" => TransformKind::Case,
            "decimal" => TransformKind::Decimal,
            "prefix" => TransformKind::Prefix,
            "suffix" => TransformKind::Suffix,
            other => TransformKind::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformKind::Case => f.write_str("case"),
            TransformKind::Decimal => f.write_str("decimal"),
            TransformKind::Prefix => f.write_str("prefix"),
            TransformKind::Suffix => f.write_str("suffix"),
            TransformKind::Unsupported(kind) => f.write_str(kind),
        }
    }
}

/// One transform kind with its parameter, e.g. `suffix` / `"%"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformSpec {
    pub kind: TransformKind,
    pub parameter: String,
}

impl TransformSpec {
    pub fn new(kind: impl Into<TransformKind>, parameter: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            parameter: parameter.into(),
        }
    }
}

impl<K: Into<TransformKind>, P: Into<String>> From<(K, P)> for TransformSpec {
    fn from((kind, parameter): (K, P)) -> Self {
        Self::new(kind, parameter)
    }
}

/// Where one attribute comes from and how to display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    pub attribute: Attribute,
    pub source: PathBuf,
    pub transforms: Vec<TransformSpec>,
}

impl AttributeSpec {
    /// Spec with no transforms.
    pub fn new(attribute: Attribute, source: impl Into<PathBuf>) -> Self {
        Self {
            attribute,
            source: source.into(),
            transforms: Vec::new(),
        }
    }

    /// Append a transform. A later transform of the same kind replaces the
    /// earlier one, keeping one parameter per kind.
    pub fn with_transform(mut self, kind: &str, parameter: impl Into<String>) -> Self {
        let spec = TransformSpec::new(kind, parameter);
        self.transforms.retain(|t| t.kind != spec.kind);
        self.transforms.push(spec);
        self
    }

    /// Logical attribute name.
    pub fn name(&self) -> &'static str {
        self.attribute.as_str()
    }
}

/// Immutable, ordered table of attribute specs with unique attributes.
#[derive(Debug, Clone)]
pub struct Registry {
    specs: Vec<AttributeSpec>,
}

impl Registry {
    /// Build a registry from caller-supplied specs.
    ///
    /// # Errors
    ///
    /// Returns `BatteryError::DuplicateAttribute` if an attribute appears twice.
    pub fn new(specs: Vec<AttributeSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for spec in &specs {
            if !seen.insert(spec.attribute) {
                return Err(BatteryError::DuplicateAttribute {
                    name: spec.name().to_string(),
                });
            }
        }
        Ok(Self { specs })
    }

    /// The canonical table, rooted at one power-supply directory.
    pub fn standard(supply_dir: impl AsRef<Path>) -> Self {
        let dir = supply_dir.as_ref();
        let at = |attribute: Attribute| AttributeSpec::new(attribute, dir.join(attribute.source_file()));

        let specs = vec![
            at(Attribute::Capacity).with_transform("suffix", "%"),
            at(Attribute::Status).with_transform("case", "capital"),
            at(Attribute::Health).with_transform("case", "capital"),
            at(Attribute::Temperature)
                .with_transform("decimal", "1")
                .with_transform("suffix", "°C"),
            at(Attribute::Voltage)
                .with_transform("decimal", "6")
                .with_transform("suffix", " V"),
            at(Attribute::Current)
                .with_transform("decimal", "3")
                .with_transform("suffix", " mA"),
            at(Attribute::Charge)
                .with_transform("decimal", "3")
                .with_transform("suffix", " mAh"),
            at(Attribute::Technology),
        ];

        Self { specs }
    }

    /// Look up a spec by attribute.
    pub fn get(&self, attribute: Attribute) -> Option<&AttributeSpec> {
        self.specs.iter().find(|spec| spec.attribute == attribute)
    }

    /// Look up a spec by name or legacy alias.
    pub fn lookup(&self, name: &str) -> Option<&AttributeSpec> {
        name.parse::<Attribute>()
            .ok()
            .and_then(|attribute| self.get(attribute))
    }

    /// Specs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a AttributeSpec;
    type IntoIter = std::slice::Iter<'a, AttributeSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
