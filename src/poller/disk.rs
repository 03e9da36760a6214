//! On-disk package check
//!
//! Installed store packages live in folders named
//! `<package name>_<version>_<arch>_<resource>_<publisher id>` under a common
//! root. A package counts as complete once one of its executables is present
//! somewhere inside such a folder.

use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::domain::{PackageDescriptor, ValidationResult};

/// Default root for store packages
pub const DEFAULT_INSTALL_ROOT: &str = r"C:\Program Files\WindowsApps";

/// Classify the installed state of `descriptor` under `root`.
///
/// No folder with the package prefix is `NotFound`, folders without any
/// expected executable are `Incomplete`, and the first executable found makes
/// it `Complete`. Folders are searched highest version first.
pub fn check_on_disk(descriptor: &PackageDescriptor, root: &Path) -> ValidationResult {
    let folders = match package_folders(descriptor, root) {
        Ok(folders) => folders,
        Err(e) => {
            return ValidationResult::error(format!("cannot read {}: {e}", root.display()));
        }
    };

    if folders.is_empty() {
        debug!(package = %descriptor.key, root = %root.display(), "no package folder");
        return ValidationResult::not_found();
    }

    for folder in &folders {
        if let Some(executable) = find_executable(descriptor, folder) {
            debug!(package = %descriptor.key, path = %executable.display(), "executable found");
            return ValidationResult::complete(executable);
        }
    }

    ValidationResult::incomplete(format!(
        "{} folder(s) found, none contains {}",
        folders.len(),
        descriptor.expected_executables.join(" or ")
    ))
}

/// Folders directly under `root` whose name starts with the package prefix
fn package_folders(descriptor: &PackageDescriptor, root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let prefix = descriptor.folder_prefix().to_ascii_lowercase();
    let mut folders = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let Ok(entry) = entry else { continue };
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir
            && entry
                .file_name()
                .to_string_lossy()
                .to_ascii_lowercase()
                .starts_with(&prefix)
        {
            folders.push(entry.path());
        }
    }

    folders.sort_by_cached_key(|folder| {
        Reverse((folder_version(folder, prefix.len()), folder.clone()))
    });
    Ok(folders)
}

/// Numeric parts of the `<version>` segment that follows the package prefix
fn folder_version(folder: &Path, prefix_len: usize) -> Vec<u32> {
    let Some(name) = folder.file_name() else {
        return Vec::new();
    };
    let name = name.to_string_lossy();
    let Some(version) = name.get(prefix_len..).and_then(|rest| rest.split('_').next()) else {
        return Vec::new();
    };
    version
        .split('.')
        .map(|part| part.parse().unwrap_or(0))
        .collect()
}

fn find_executable(descriptor: &PackageDescriptor, folder: &Path) -> Option<PathBuf> {
    WalkDir::new(folder)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                trace!(folder = %folder.display(), "skipping unreadable entry: {e}");
                None
            }
        })
        .find(|entry| {
            entry.file_type().is_file()
                && descriptor.is_expected_executable(&entry.file_name().to_string_lossy())
        })
        .map(walkdir::DirEntry::into_path)
}
