//! Common test utilities for winstore-repair integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Command for the real binary, isolated from the caller's environment
#[allow(deprecated)]
pub fn winstore_cmd() -> Command {
    let mut cmd = Command::cargo_bin("winstore-repair").unwrap();
    cmd.env_remove("WINSTORE_REPAIR_CONFIG")
        .env_remove("WINSTORE_REPAIR_OUTPUT_DIR")
        .env_remove("WINSTORE_REPAIR_LOG");
    cmd
}

/// A fake install root plus an output directory
pub struct Fixture {
    _temp: TempDir,
    pub install_root: PathBuf,
    pub output_dir: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let install_root = temp.path().join("WindowsApps");
        let output_dir = temp.path().join("out");
        std::fs::create_dir_all(&install_root).expect("Failed to create install root");
        Self {
            _temp: temp,
            install_root,
            output_dir,
        }
    }

    /// Create an installed package folder, optionally holding `executable`
    #[allow(dead_code)]
    pub fn install(&self, folder: &str, executable: Option<&str>) -> PathBuf {
        let path = self.install_root.join(folder);
        std::fs::create_dir_all(&path).expect("Failed to create package folder");
        if let Some(name) = executable {
            std::fs::write(path.join(name), b"MZ").expect("Failed to write executable");
        }
        path
    }

    /// Base arguments pointing the binary at this fixture
    pub fn args(&self) -> Vec<String> {
        vec![
            "--install-root".to_string(),
            self.install_root.display().to_string(),
            "--output-dir".to_string(),
            self.output_dir.display().to_string(),
        ]
    }

    /// Files in the output directory with the given extension
    #[allow(dead_code)]
    pub fn outputs(&self, extension: &str) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(&self.output_dir) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == extension))
            .collect()
    }

    /// Install every catalog package completely
    #[allow(dead_code)]
    pub fn install_all(&self) {
        self.install(
            "Microsoft.ScreenSketch_11.2409.25.0_x64__8wekyb3d8bbwe",
            Some("SnippingTool.exe"),
        );
        self.install(
            "Microsoft.Windows.Photos_2024.11070.15005.0_x64__8wekyb3d8bbwe",
            Some("Photos.exe"),
        );
        self.install(
            "Microsoft.WindowsCalculator_11.2405.2.0_x64__8wekyb3d8bbwe",
            Some("CalculatorApp.exe"),
        );
        self.install(
            "Microsoft.WindowsNotepad_11.2407.9.0_x64__8wekyb3d8bbwe",
            Some("Notepad.exe"),
        );
    }
}

#[allow(dead_code)]
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
