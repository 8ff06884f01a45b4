//! Builder for creating and configuring Battery samples.

use std::path::{Path, PathBuf};

use super::Battery;
use crate::{format::FormatPipeline, registry::Registry};

/// Where the kernel exposes power supplies.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/power_supply";

/// Supply directory read when none is named.
pub const DEFAULT_SUPPLY: &str = "battery";

/// Builder for creating and configuring [`Battery`] samples.
#[derive(Debug, Clone, Default)]
pub struct BatteryBuilder {
    sysfs_root: Option<PathBuf>,
    supply: Option<String>,
    registry: Option<Registry>,
    seed: Option<u64>,
}

impl BatteryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the power-supply class directory.
    ///
    /// If not specified, uses `/sys/class/power_supply`.
    pub fn with_sysfs_root<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.sysfs_root = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the supply directory name under the root, e.g. `BAT0`.
    ///
    /// If not specified, uses `battery`.
    pub fn with_supply<S: Into<String>>(mut self, supply: Option<S>) -> Self {
        if let Some(supply) = supply {
            self.supply = Some(supply.into());
        }
        self
    }

    /// Replaces the standard registry with a caller-supplied one.
    ///
    /// Root and supply are ignored when a registry is given, since its specs
    /// carry full source paths.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Pins the random source used by the `random` case mode.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Directory the standard registry reads from.
    pub fn supply_dir(&self) -> PathBuf {
        let root = self
            .sysfs_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSFS_ROOT));
        root.join(self.supply.as_deref().unwrap_or(DEFAULT_SUPPLY))
    }

    /// Builds an empty sample; call [`Battery::read_all`] to populate it.
    pub fn build(self) -> Battery {
        let supply_dir = self.supply_dir();
        let registry = self
            .registry
            .unwrap_or_else(|| Registry::standard(supply_dir));
        let pipeline = match self.seed {
            Some(seed) => FormatPipeline::seeded(seed),
            None => FormatPipeline::new(),
        };
        Battery::new(registry, pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribute;

    #[test]
    fn test_default_supply_dir() {
        assert_eq!(
            BatteryBuilder::new().supply_dir(),
            PathBuf::from("/sys/class/power_supply/battery")
        );
    }

    #[test]
    fn test_custom_root_and_supply() {
        let builder = BatteryBuilder::new()
            .with_sysfs_root(Some("/tmp/ps"))
            .with_supply(Some("BAT0"));
        assert_eq!(builder.supply_dir(), PathBuf::from("/tmp/ps/BAT0"));

        let battery = builder.build();
        let capacity = battery.registry().get(Attribute::Capacity).unwrap();
        assert_eq!(capacity.source, PathBuf::from("/tmp/ps/BAT0/capacity"));
    }

    #[test]
    fn test_none_keeps_defaults() {
        let builder = BatteryBuilder::new()
            .with_sysfs_root(None::<&str>)
            .with_supply(None::<String>)
            .with_seed(None);
        assert_eq!(
            builder.supply_dir(),
            PathBuf::from("/sys/class/power_supply/battery")
        );
    }
}
