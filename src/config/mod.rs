//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, default file location)
//! - CLI option types and parsing
//! - Configuration file loading
//! - The merged, per-run lookup configuration

mod constants;
mod file;
mod lookup;
mod types;

// Re-export public API
pub use constants::*;
pub use file::{default_config_path, load_file_config, FileConfig};
pub use lookup::LookupConfig;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
