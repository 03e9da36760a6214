//! Error types and handling for winstore-repair
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`catalog`]: Package lookup errors
//! - [`config`]: Configuration errors
//! - [`platform`]: Installer and query collaborator errors
//! - [`output`]: Export and transcript errors

pub mod catalog;
pub mod config;
pub mod output;
pub mod platform;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for winstore-repair operations
#[derive(Error, Diagnostic, Debug)]
pub enum RepairError {
    // Catalog errors
    #[error("Unknown package '{key}'")]
    #[diagnostic(
        code(winstore_repair::catalog::unknown_package),
        help("Supported packages: ScreenSketch, Photos, Calculator, Notepad")
    )]
    UnknownPackage { key: String },

    // Platform errors
    #[error("Installer rejected request for '{package}': {message}")]
    #[diagnostic(code(winstore_repair::platform::install_invocation))]
    InstallInvocation { package: String, message: String },

    #[error("{collaborator} unavailable: {reason}")]
    #[diagnostic(
        code(winstore_repair::platform::collaborator_unavailable),
        help("Package queries require Windows 10 2004 or later and an elevated prompt")
    )]
    CollaboratorUnavailable {
        collaborator: &'static str,
        reason: String,
    },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(winstore_repair::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(winstore_repair::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(winstore_repair::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(winstore_repair::config::invalid))]
    ConfigInvalid { message: String },

    // Output errors
    #[error("Failed to write export file: {path}: {reason}")]
    #[diagnostic(
        code(winstore_repair::output::export_failed),
        help("Pass --output-dir to choose a writable directory, or --no-export to skip the export")
    )]
    ExportFailed { path: String, reason: String },

    #[error("Failed to initialize logging: {message}")]
    #[diagnostic(code(winstore_repair::output::logging))]
    LoggingInit { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(winstore_repair::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RepairError {
    fn from(err: std::io::Error) -> Self {
        RepairError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RepairError {
    fn from(err: serde_yaml::Error) -> Self {
        RepairError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RepairError {
    fn from(err: serde_json::Error) -> Self {
        RepairError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RepairError>;
