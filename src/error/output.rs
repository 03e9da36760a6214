//! Export and transcript errors

use super::RepairError;

/// Creates an export failed error
pub fn export_failed(path: impl Into<String>, reason: impl Into<String>) -> RepairError {
    RepairError::ExportFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a logging initialization error
pub fn logging_init(message: impl Into<String>) -> RepairError {
    RepairError::LoggingInit {
        message: message.into(),
    }
}
