//! Platform collaborators
//!
//! The package inventory, the provisioned-package registry and the store
//! installer are owned by the operating system. This module defines the seams
//! the rest of the crate talks to, and picks the implementation for the
//! current target:
//! - [`winrt`]: WinRT `PackageManager` and `AppInstallManager`
//! - [`unsupported`]: every query fails with `CollaboratorUnavailable`

use crate::error::Result;

#[cfg(test)]
pub mod fake;
#[cfg(not(windows))]
pub mod unsupported;
#[cfg(windows)]
pub mod winrt;

/// A package registered for some user on this machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    pub full_name: String,
}

/// What the installer is asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub install_id: String,
    pub repair: bool,
    pub all_users: bool,
}

/// Package inventory query
pub trait PackageInventory {
    /// Find an installed package by identity name
    fn find_installed(&self, package_name: &str) -> Result<Option<InstalledPackage>>;
}

/// Provisioned-package registry query
pub trait ProvisionedRegistry {
    /// Return the first provisioned package whose name contains `fragment`
    fn find_provisioned(&self, fragment: &str) -> Result<Option<String>>;
}

/// Store install/repair operation
pub trait StoreInstaller {
    /// Queue one install or repair. Returns once the request is accepted.
    fn start_install(&self, request: &InstallRequest) -> Result<()>;
}

/// Borrowed set of collaborators handed to the install flow
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub inventory: &'a dyn PackageInventory,
    pub registry: &'a dyn ProvisionedRegistry,
    pub installer: &'a dyn StoreInstaller,
}

impl<'a> Collaborators<'a> {
    /// Borrow all three roles from one backend
    pub fn from_backend<T>(backend: &'a T) -> Self
    where
        T: PackageInventory + ProvisionedRegistry + StoreInstaller,
    {
        Self {
            inventory: backend,
            registry: backend,
            installer: backend,
        }
    }
}

/// Backend for the current target
#[cfg(windows)]
pub fn system() -> Result<winrt::WindowsPlatform> {
    winrt::WindowsPlatform::new()
}

/// Backend for the current target
#[cfg(not(windows))]
#[allow(clippy::unnecessary_wraps)]
pub fn system() -> Result<unsupported::UnsupportedPlatform> {
    Ok(unsupported::UnsupportedPlatform)
}
