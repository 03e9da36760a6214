//! Command implementations for the winstore-repair CLI
//!
//! Commands that install return the process exit code derived from their
//! report; the others return unit.

pub mod check;
pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod repair;
pub mod version;
