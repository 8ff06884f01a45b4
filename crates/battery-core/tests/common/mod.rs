use std::{fs, path::Path};

use battery_core::{Battery, BatteryBuilder};
use tempfile::TempDir;

/// Attribute files of a healthy, discharging phone battery.
pub const FULL_SUPPLY: &[(&str, &str)] = &[
    ("capacity", "76\n"),
    ("status", "Discharging\n"),
    ("health", "Good\n"),
    ("temp", "305\n"),
    ("voltage_now", "4123456\n"),
    ("current_now", "-1234567\n"),
    ("charge_counter", "2345000\n"),
    ("technology", "Li-ion\n"),
];

/// Helper function to create a power-supply directory named `battery`
/// holding the given attribute files.
pub fn create_supply(files: &[(&str, &str)]) -> TempDir {
    let root = TempDir::new().expect("Failed to create temp dir");
    let supply = root.path().join("battery");
    fs::create_dir(&supply).expect("Failed to create supply dir");
    for (name, contents) in files {
        write_attribute(root.path(), name, contents);
    }
    root
}

/// Overwrite one attribute file of a supply created by [`create_supply`].
pub fn write_attribute(root: &Path, name: &str, contents: &str) {
    fs::write(root.join("battery").join(name), contents).expect("Failed to write attribute");
}

/// Helper function to build and populate a sample over `root`.
pub fn read_sample(root: &Path) -> Battery {
    let mut battery = BatteryBuilder::new()
        .with_sysfs_root(Some(root))
        .with_seed(Some(3))
        .build();
    battery.read_all();
    battery
}
