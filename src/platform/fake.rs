//! In-memory collaborators for tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

use super::{InstallRequest, InstalledPackage, PackageInventory, ProvisionedRegistry, StoreInstaller};
use crate::catalog;
use crate::error::{
    Result,
    platform::{install_invocation, unavailable},
};

/// Scriptable stand-in for the Windows package APIs
#[derive(Default)]
pub struct FakePlatform {
    installed: RefCell<HashMap<String, InstalledPackage>>,
    /// Registry starts matching on this poll (1-based); `None` never matches
    provisioned_after: Option<u32>,
    registry_polls: Cell<u32>,
    requests: RefCell<Vec<InstallRequest>>,
    reject_with: Option<String>,
    /// Install ids rejected regardless of `reject_with`
    reject_ids: Vec<String>,
    inventory_fails: bool,
    registry_fails: bool,
    /// When set, accepted requests drop the package executable under this root
    materialize_into: Option<PathBuf>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(self, package_name: &str) -> Self {
        self.installed.borrow_mut().insert(
            package_name.to_string(),
            InstalledPackage {
                full_name: format!("{package_name}_1.0.0.0_x64__8wekyb3d8bbwe"),
            },
        );
        self
    }

    pub fn provisioned_after(mut self, polls: u32) -> Self {
        self.provisioned_after = Some(polls);
        self
    }

    pub fn rejecting(mut self, message: &str) -> Self {
        self.reject_with = Some(message.to_string());
        self
    }

    pub fn rejecting_id(mut self, install_id: &str) -> Self {
        self.reject_ids.push(install_id.to_string());
        self
    }

    pub fn inventory_failing(mut self) -> Self {
        self.inventory_fails = true;
        self
    }

    pub fn registry_failing(mut self) -> Self {
        self.registry_fails = true;
        self
    }

    pub fn materializing_into(mut self, root: PathBuf) -> Self {
        self.materialize_into = Some(root);
        self
    }

    pub fn registry_polls(&self) -> u32 {
        self.registry_polls.get()
    }

    pub fn requests(&self) -> Vec<InstallRequest> {
        self.requests.borrow().clone()
    }

    fn materialize(&self, install_id: &str) -> std::io::Result<()> {
        let Some(root) = &self.materialize_into else {
            return Ok(());
        };
        let Some(descriptor) = catalog::all().iter().find(|d| d.install_id == install_id) else {
            return Ok(());
        };
        let folder = root.join(format!("{}1.0.0.0_x64__8wekyb3d8bbwe", descriptor.folder_prefix()));
        std::fs::create_dir_all(&folder)?;
        std::fs::write(folder.join(descriptor.expected_executables[0]), b"MZ")?;
        self.installed.borrow_mut().insert(
            descriptor.package_name.to_string(),
            InstalledPackage {
                full_name: descriptor.package_name.to_string(),
            },
        );
        Ok(())
    }
}

impl PackageInventory for FakePlatform {
    fn find_installed(&self, package_name: &str) -> Result<Option<InstalledPackage>> {
        if self.inventory_fails {
            return Err(unavailable("package inventory", "fake inventory offline"));
        }
        Ok(self.installed.borrow().get(package_name).cloned())
    }
}

impl ProvisionedRegistry for FakePlatform {
    fn find_provisioned(&self, fragment: &str) -> Result<Option<String>> {
        if self.registry_fails {
            return Err(unavailable("provisioned registry", "fake registry offline"));
        }
        let polls = self.registry_polls.get() + 1;
        self.registry_polls.set(polls);
        match self.provisioned_after {
            Some(after) if polls >= after => Ok(Some(format!("{fragment}_1.0.0.0_neutral"))),
            _ => Ok(None),
        }
    }
}

impl StoreInstaller for FakePlatform {
    fn start_install(&self, request: &InstallRequest) -> Result<()> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(message) = &self.reject_with {
            return Err(install_invocation(&request.install_id, message.as_str()));
        }
        if self.reject_ids.contains(&request.install_id) {
            return Err(install_invocation(
                &request.install_id,
                "0x80073CF9 install failed",
            ));
        }
        self.materialize(&request.install_id)
            .map_err(|e| install_invocation(&request.install_id, e.to_string()))
    }
}
