//! WinRT backend
//!
//! Inventory and provisioning queries go through
//! `Windows.Management.Deployment.PackageManager`; install and repair requests
//! go through the store's `AppInstallManager`, which queues the work and
//! returns before deployment finishes. The `windows` crate does not project
//! the store installer namespace, so `build.rs` generates those bindings.

use tracing::debug;
use windows::ApplicationModel::Package;
use windows::Management::Deployment::PackageManager;
use windows::core::HSTRING;

use install_control::{AppInstallManager, AppInstallOptions};

use super::{InstallRequest, InstalledPackage, PackageInventory, ProvisionedRegistry, StoreInstaller};
use crate::error::{
    Result,
    platform::{install_invocation, unavailable},
};

/// `Windows.ApplicationModel.Store.Preview.InstallControl`
#[allow(
    non_snake_case,
    non_camel_case_types,
    non_upper_case_globals,
    dead_code,
    clippy::all,
    clippy::pedantic
)]
mod install_control {
    include!(concat!(env!("OUT_DIR"), "/install_control.rs"));
}

/// Client id reported to the store with each install request
const CLIENT_ID: &str = "winstore-repair";

/// Backend over the WinRT package and store APIs
pub struct WindowsPlatform {
    packages: PackageManager,
    installs: AppInstallManager,
}

impl WindowsPlatform {
    pub fn new() -> Result<Self> {
        let packages =
            PackageManager::new().map_err(|e| unavailable("package inventory", e.message()))?;
        let installs =
            AppInstallManager::new().map_err(|e| unavailable("store installer", e.message()))?;
        Ok(Self { packages, installs })
    }

    fn describe(package: &Package) -> windows::core::Result<InstalledPackage> {
        let full_name = package.Id()?.FullName()?.to_string();
        Ok(InstalledPackage { full_name })
    }

    fn query_installed(&self, package_name: &str) -> windows::core::Result<Option<InstalledPackage>> {
        // An empty security id scopes the query to the current user
        let found = self
            .packages
            .FindPackagesByUserSecurityIdName(&HSTRING::new(), &HSTRING::from(package_name))?;
        let cursor = found.First()?;
        if !cursor.HasCurrent()? {
            return Ok(None);
        }
        Self::describe(&cursor.Current()?).map(Some)
    }

    fn query_provisioned(&self, fragment: &str) -> windows::core::Result<Option<String>> {
        let provisioned = self.packages.FindProvisionedPackages()?;
        for index in 0..provisioned.Size()? {
            let name = provisioned.GetAt(index)?.Id()?.FullName()?.to_string();
            if name.contains(fragment) {
                return Ok(Some(name));
            }
        }
        Ok(None)
    }

    fn submit(&self, request: &InstallRequest) -> windows::core::Result<u32> {
        let options = AppInstallOptions::new()?;
        options.SetRepair(request.repair)?;
        options.SetInstallForAllUsers(request.all_users)?;

        let items = self
            .installs
            .StartProductInstallWithOptionsAsync(
                &HSTRING::from(request.install_id.as_str()),
                &HSTRING::new(),
                &HSTRING::from(CLIENT_ID),
                &HSTRING::new(),
                &options,
            )?
            .get()?;
        items.Size()
    }
}

impl PackageInventory for WindowsPlatform {
    fn find_installed(&self, package_name: &str) -> Result<Option<InstalledPackage>> {
        self.query_installed(package_name)
            .map_err(|e| unavailable("package inventory", e.message()))
    }
}

impl ProvisionedRegistry for WindowsPlatform {
    fn find_provisioned(&self, fragment: &str) -> Result<Option<String>> {
        self.query_provisioned(fragment)
            .map_err(|e| unavailable("provisioned registry", e.message()))
    }
}

impl StoreInstaller for WindowsPlatform {
    fn start_install(&self, request: &InstallRequest) -> Result<()> {
        match self.submit(request) {
            Ok(0) => Err(install_invocation(
                &request.install_id,
                "store returned no install items for this product",
            )),
            Ok(items) => {
                debug!(
                    install_id = %request.install_id,
                    items,
                    repair = request.repair,
                    all_users = request.all_users,
                    "install request accepted"
                );
                Ok(())
            }
            Err(e) => Err(install_invocation(&request.install_id, e.message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_options_carry_repair_and_all_users() {
        let options = AppInstallOptions::new().unwrap();
        options.SetRepair(true).unwrap();
        options.SetInstallForAllUsers(true).unwrap();

        assert!(options.Repair().unwrap());
        assert!(options.InstallForAllUsers().unwrap());
    }
}
