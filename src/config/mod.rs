//! Configuration handling for winstore-repair
//!
//! This module contains:
//! - [`file`]: the optional YAML configuration file
//! - [`settings`]: effective settings after command-line overrides

pub mod file;
pub mod settings;


pub use file::{FileConfig, PollConfig};
pub use settings::{Overrides, Settings};
