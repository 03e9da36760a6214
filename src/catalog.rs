//! Package catalog
//!
//! Immutable table of the store packages this tool installs, keyed by the
//! short names accepted on the command line.

use crate::domain::{PackageDescriptor, PackageKey};
use crate::error::Result;

static CATALOG: [PackageDescriptor; 4] = [
    PackageDescriptor {
        key: PackageKey::ScreenSketch,
        install_id: "9MZ95KL8MR0L",
        package_name: "Microsoft.ScreenSketch",
        display_name: "Snipping Tool",
        provisioned_name: "Microsoft.ScreenSketch",
        expected_executables: &["SnippingTool.exe", "ScreenSketch.exe"],
    },
    PackageDescriptor {
        key: PackageKey::Photos,
        install_id: "9WZDNCRFJBH4",
        package_name: "Microsoft.Windows.Photos",
        display_name: "Microsoft Photos",
        provisioned_name: "Microsoft.Windows.Photos",
        expected_executables: &["Photos.exe", "Microsoft.Photos.exe"],
    },
    PackageDescriptor {
        key: PackageKey::Calculator,
        install_id: "9WZDNCRFHVN5",
        package_name: "Microsoft.WindowsCalculator",
        display_name: "Windows Calculator",
        provisioned_name: "Microsoft.WindowsCalculator",
        expected_executables: &["CalculatorApp.exe", "Calculator.exe"],
    },
    PackageDescriptor {
        key: PackageKey::Notepad,
        install_id: "9MSMLRH6LZF3",
        package_name: "Microsoft.WindowsNotepad",
        display_name: "Windows Notepad",
        provisioned_name: "Microsoft.WindowsNotepad",
        expected_executables: &["Notepad.exe"],
    },
];

/// All descriptors in catalog order
pub fn all() -> &'static [PackageDescriptor] {
    &CATALOG
}

/// Descriptor for a parsed key
pub fn descriptor(key: PackageKey) -> &'static PackageDescriptor {
    // CATALOG holds exactly one entry per key, in PackageKey::ALL order
    &CATALOG[key as usize]
}

/// Look up a descriptor by its command-line key
pub fn lookup(key: &str) -> Result<&'static PackageDescriptor> {
    let parsed: PackageKey = key.parse()?;
    Ok(descriptor(parsed))
}

/// Resolve command-line keys to descriptors, defaulting to the whole catalog.
///
/// Duplicates are dropped and catalog order is kept.
pub fn resolve_targets(keys: &[String]) -> Result<Vec<&'static PackageDescriptor>> {
    if keys.is_empty() {
        return Ok(CATALOG.iter().collect());
    }

    let mut selected = Vec::new();
    for key in keys {
        selected.push(lookup(key)?.key);
    }

    Ok(CATALOG
        .iter()
        .filter(|descriptor| selected.contains(&descriptor.key))
        .collect())
}
