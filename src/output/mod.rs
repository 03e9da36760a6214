//! Persisted run artifacts
//!
//! Each run writes a CSV export and a transcript next to each other, named
//! after the moment the run started:
//! - `StoreAppRepair_<yyyyMMdd_HHmmss>.csv`
//! - `StoreAppRepair_<yyyyMMdd_HHmmss>.log`

pub mod export;

use std::env;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Common file name stem for run artifacts
pub const ARTIFACT_PREFIX: &str = "StoreAppRepair";

/// Returns the directory run artifacts go to by default.
/// Never returns a relative path, so artifacts never land in the current
/// working directory when TEMP or TMPDIR is relative.
pub fn output_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Names the artifacts of one run
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    dir: PathBuf,
    stamp: String,
}

impl RunArtifacts {
    pub fn new(dir: &Path, started: DateTime<Local>) -> Self {
        Self {
            dir: dir.to_path_buf(),
            stamp: started.format("%Y%m%d_%H%M%S").to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name without extension, shared by all artifacts of the run
    pub fn stem(&self) -> String {
        format!("{ARTIFACT_PREFIX}_{}", self.stamp)
    }

    pub fn export_file_name(&self) -> String {
        format!("{}.csv", self.stem())
    }

    pub fn transcript_file_name(&self) -> String {
        format!("{}.log", self.stem())
    }

    pub fn export_path(&self) -> PathBuf {
        self.dir.join(self.export_file_name())
    }

    pub fn transcript_path(&self) -> PathBuf {
        self.dir.join(self.transcript_file_name())
    }
}
