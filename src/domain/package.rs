//! Package domain types

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{RepairError, catalog::unknown_package};

/// Closed set of packages this tool knows how to install
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PackageKey {
    ScreenSketch,
    Photos,
    Calculator,
    Notepad,
}

impl PackageKey {
    /// All keys in catalog order
    pub const ALL: [PackageKey; 4] = [
        PackageKey::ScreenSketch,
        PackageKey::Photos,
        PackageKey::Calculator,
        PackageKey::Notepad,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PackageKey::ScreenSketch => "ScreenSketch",
            PackageKey::Photos => "Photos",
            PackageKey::Calculator => "Calculator",
            PackageKey::Notepad => "Notepad",
        }
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PackageKey {
    type Err = RepairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PackageKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| unknown_package(s))
    }
}

/// Static metadata identifying one store package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    pub key: PackageKey,
    /// Store product id handed to the installer
    pub install_id: &'static str,
    /// Package identity name; installed folders start with `<package_name>_`
    pub package_name: &'static str,
    pub display_name: &'static str,
    /// Substring matched against provisioned package names
    pub provisioned_name: &'static str,
    pub expected_executables: &'static [&'static str],
}

impl PackageDescriptor {
    /// Folder name prefix for installed copies of this package
    pub fn folder_prefix(&self) -> String {
        format!("{}_", self.package_name)
    }

    /// Whether `file_name` is one of the executables this package ships
    pub fn is_expected_executable(&self, file_name: &str) -> bool {
        self.expected_executables
            .iter()
            .any(|exe| exe.eq_ignore_ascii_case(file_name))
    }
}

impl fmt::Display for PackageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.key)
    }
}
