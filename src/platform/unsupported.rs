//! Fallback backend for targets without the Windows package APIs

use super::{InstallRequest, InstalledPackage, PackageInventory, ProvisionedRegistry, StoreInstaller};
use crate::error::{Result, platform::unavailable};

const REASON: &str = "store package APIs are only available on Windows";

/// Backend whose every query reports the collaborator as unavailable
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedPlatform;

impl PackageInventory for UnsupportedPlatform {
    fn find_installed(&self, _package_name: &str) -> Result<Option<InstalledPackage>> {
        Err(unavailable("package inventory", REASON))
    }
}

impl ProvisionedRegistry for UnsupportedPlatform {
    fn find_provisioned(&self, _fragment: &str) -> Result<Option<String>> {
        Err(unavailable("provisioned registry", REASON))
    }
}

impl StoreInstaller for UnsupportedPlatform {
    fn start_install(&self, _request: &InstallRequest) -> Result<()> {
        Err(unavailable("store installer", REASON))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepairError;

    #[test]
    fn test_every_query_is_unavailable() {
        let platform = UnsupportedPlatform;
        assert!(matches!(
            platform.find_installed("Microsoft.WindowsNotepad"),
            Err(RepairError::CollaboratorUnavailable { .. })
        ));
        assert!(matches!(
            platform.find_provisioned("Microsoft.WindowsNotepad"),
            Err(RepairError::CollaboratorUnavailable { .. })
        ));
        let request = InstallRequest {
            install_id: "9MSMLRH6LZF3".to_string(),
            repair: false,
            all_users: true,
        };
        assert!(platform.start_install(&request).is_err());
    }
}
