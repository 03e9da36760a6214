//! Catalog errors

use super::RepairError;

/// Creates an unknown package error
pub fn unknown_package(key: impl Into<String>) -> RepairError {
    RepairError::UnknownPackage { key: key.into() }
}
