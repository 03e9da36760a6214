//! Domain models for winstore-repair
//!
//! This module contains pure domain objects: the package descriptors served by
//! the catalog, the per-package install attempt and point-in-time validation
//! results. These types are free of platform dependencies.

pub mod attempt;
pub mod package;
pub mod validation;

pub use attempt::{AttemptOutcome, InstallAttempt, InstallMode};
pub use package::{PackageDescriptor, PackageKey};
pub use validation::{ValidationResult, ValidationStatus};
