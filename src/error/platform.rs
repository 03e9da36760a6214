//! Installer and query collaborator errors

use super::RepairError;

/// Creates an install invocation error
pub fn install_invocation(package: impl Into<String>, message: impl Into<String>) -> RepairError {
    RepairError::InstallInvocation {
        package: package.into(),
        message: message.into(),
    }
}

/// Creates a collaborator unavailable error
pub fn unavailable(collaborator: &'static str, reason: impl Into<String>) -> RepairError {
    RepairError::CollaboratorUnavailable {
        collaborator,
        reason: reason.into(),
    }
}
