//! Point-in-time validation results

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// On-disk state of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationStatus {
    Complete,
    Incomplete,
    NotFound,
    Error,
}

impl ValidationStatus {
    pub fn is_complete(self) -> bool {
        self == ValidationStatus::Complete
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationStatus::Complete => "Complete",
            ValidationStatus::Incomplete => "Incomplete",
            ValidationStatus::NotFound => "NotFound",
            ValidationStatus::Error => "Error",
        };
        f.pad(label)
    }
}

/// Result of a single on-disk check.
///
/// `executable_path` is only ever set for [`ValidationStatus::Complete`]; the
/// constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    status: ValidationStatus,
    executable_path: Option<PathBuf>,
    detail: Option<String>,
}

impl ValidationResult {
    pub fn complete(executable_path: PathBuf) -> Self {
        Self {
            status: ValidationStatus::Complete,
            executable_path: Some(executable_path),
            detail: None,
        }
    }

    pub fn incomplete(detail: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Incomplete,
            executable_path: None,
            detail: Some(detail.into()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: ValidationStatus::NotFound,
            executable_path: None,
            detail: None,
        }
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Error,
            executable_path: None,
            detail: Some(detail.into()),
        }
    }

    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    pub fn executable_path(&self) -> Option<&Path> {
        self.executable_path.as_deref()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_complete_carries_a_path() {
        let complete = ValidationResult::complete(PathBuf::from("Notepad.exe"));
        assert_eq!(complete.executable_path(), Some(Path::new("Notepad.exe")));
        assert!(ValidationResult::incomplete("no exe").executable_path().is_none());
        assert!(ValidationResult::not_found().executable_path().is_none());
        assert!(ValidationResult::error("denied").executable_path().is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ValidationStatus::NotFound.to_string(), "NotFound");
        assert_eq!(ValidationStatus::Complete.to_string(), "Complete");
    }
}
