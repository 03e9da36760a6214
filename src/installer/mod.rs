//! Installer invoker
//!
//! Decides between a fresh install and a repair, then hands exactly one request
//! to the store installer. The request is asynchronous: acceptance says nothing
//! about completion, which is the poller's job.

use tracing::{info, warn};

use crate::domain::{InstallAttempt, InstallMode, PackageDescriptor};
use crate::error::Result;
use crate::platform::{InstallRequest, PackageInventory, StoreInstaller};

/// Issues install and repair requests for catalog packages
pub struct Invoker<'a> {
    inventory: &'a dyn PackageInventory,
    installer: &'a dyn StoreInstaller,
    all_users: bool,
}

impl<'a> Invoker<'a> {
    pub fn new(
        inventory: &'a dyn PackageInventory,
        installer: &'a dyn StoreInstaller,
        all_users: bool,
    ) -> Self {
        Self {
            inventory,
            installer,
            all_users,
        }
    }

    /// Choose the mode and open an attempt.
    ///
    /// A package the inventory already knows about is repaired; anything else
    /// is freshly installed.
    pub fn plan(&self, descriptor: &PackageDescriptor) -> Result<InstallAttempt> {
        let existing = self.inventory.find_installed(descriptor.package_name)?;
        let mode = match &existing {
            Some(package) => {
                info!(package = %descriptor.key, full_name = %package.full_name, "already registered, repairing");
                InstallMode::Repair
            }
            None => InstallMode::FreshInstall,
        };
        Ok(InstallAttempt::new(descriptor.clone(), mode))
    }

    /// Send the single install request for a planned attempt
    pub fn submit(&self, attempt: &InstallAttempt) -> Result<()> {
        let descriptor = attempt.descriptor();
        let request = InstallRequest {
            install_id: descriptor.install_id.to_string(),
            repair: attempt.mode() == Some(InstallMode::Repair),
            all_users: self.all_users,
        };

        info!(
            package = %descriptor.key,
            install_id = descriptor.install_id,
            repair = request.repair,
            all_users = request.all_users,
            "submitting install request"
        );

        self.installer.start_install(&request).inspect_err(|e| {
            warn!(package = %descriptor.key, "install request rejected: {e}");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::domain::{AttemptOutcome, PackageKey};
    use crate::error::RepairError;
    use crate::platform::fake::FakePlatform;

    fn calculator() -> &'static PackageDescriptor {
        catalog::descriptor(PackageKey::Calculator)
    }

    fn invoke(invoker: &Invoker<'_>, descriptor: &PackageDescriptor) -> Result<InstallAttempt> {
        let attempt = invoker.plan(descriptor)?;
        invoker.submit(&attempt)?;
        Ok(attempt)
    }

    #[test]
    fn test_absent_package_is_fresh_install() {
        let platform = FakePlatform::new();
        let invoker = Invoker::new(&platform, &platform, true);

        let attempt = invoke(&invoker, calculator()).unwrap();

        assert_eq!(attempt.mode(), Some(InstallMode::FreshInstall));
        assert_eq!(attempt.outcome(), &AttemptOutcome::Pending);
        let requests = platform.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].install_id, "9WZDNCRFHVN5");
        assert!(!requests[0].repair);
        assert!(requests[0].all_users);
    }

    #[test]
    fn test_present_package_is_repaired() {
        let platform = FakePlatform::new().with_installed("Microsoft.WindowsCalculator");
        let invoker = Invoker::new(&platform, &platform, false);

        let attempt = invoke(&invoker, calculator()).unwrap();

        assert_eq!(attempt.mode(), Some(InstallMode::Repair));
        let requests = platform.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].repair);
        assert!(!requests[0].all_users);
    }

    #[test]
    fn test_rejected_request_carries_message() {
        let platform = FakePlatform::new().rejecting("0x803F8001 product not found");
        let invoker = Invoker::new(&platform, &platform, true);

        let result = invoke(&invoker, calculator());

        match result {
            Err(RepairError::InstallInvocation { package, message }) => {
                assert_eq!(package, "9WZDNCRFHVN5");
                assert!(message.contains("0x803F8001"));
            }
            other => panic!("expected InstallInvocation, got {other:?}"),
        }
        assert_eq!(platform.requests().len(), 1, "no automatic retry");
    }

    #[test]
    fn test_inventory_failure_stops_before_request() {
        let platform = FakePlatform::new().inventory_failing();
        let invoker = Invoker::new(&platform, &platform, true);

        let result = invoke(&invoker, calculator());

        assert!(matches!(
            result,
            Err(RepairError::CollaboratorUnavailable { .. })
        ));
        assert!(platform.requests().is_empty());
    }
}
